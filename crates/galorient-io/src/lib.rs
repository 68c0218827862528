//! galorient-io - Data loading for galorient
//!
//! Reads whitespace-delimited numeric columns (`x y magnitude`, one point
//! per row) from a file or stdin into column-wise arrays. Parsing is strict:
//! every row must carry exactly three finite numbers, and errors report the
//! offending line.

pub mod columns;

pub use columns::*;
