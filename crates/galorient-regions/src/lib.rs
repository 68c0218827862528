//! galorient-regions - Spatial region partitioning for galorient
//!
//! A point cloud is split into three bands per axis by four scalar
//! thresholds (north/south on y, east/west on x). Thirteen named regions are
//! derived from the bands; a point can belong to several regions at once
//! (N contains every north point, NE only the north-east corner).
//!
//! Band comparisons are half-open, so each point lands in exactly one band
//! per axis and no point is double-counted within an axis split.

pub mod label;
pub mod partition;
pub mod thresholds;

pub use label::*;
pub use partition::*;
pub use thresholds::*;
