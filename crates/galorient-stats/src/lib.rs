//! galorient-stats - Statistical primitives for galorient
//!
//! Provides the empirical cumulative distribution function (ECDF) used to
//! compare magnitude distributions across spatial regions of a point cloud.
//!
//! # Design Philosophy
//!
//! ECDFs are preferred over histograms because they:
//! - Require no bin width decisions
//! - Preserve all information in the data
//! - Enable more accurate visual comparison

pub mod ecdf;

pub use ecdf::*;
