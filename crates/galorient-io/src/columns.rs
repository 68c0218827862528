//! Whitespace-column reader for point samples
//!
//! Input format follows the common plain-text table convention: columns
//! separated by runs of whitespace, blank lines and `#` comment lines
//! ignored. Exactly three columns per row: x, y, magnitude.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading point columns
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to open {path}: {source}")]
    OpenFailed {
        path: String,
        source: io::Error,
    },

    #[error("line {line}: expected 3 columns (x y magnitude), found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: non-finite value '{token}' in column {column}")]
    NonFinite {
        line: usize,
        column: &'static str,
        token: String,
    },

    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Column-wise point samples; the i-th x, y and magnitude belong together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointCloud {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub magnitude: Vec<f64>,
}

impl PointCloud {
    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the cloud holds no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Read `x y magnitude` rows from any buffered source
pub fn load_columns<R: BufRead>(reader: R) -> IoResult<PointCloud> {
    let mut cloud = PointCloud::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let row = line.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }

        let line_no = index + 1;
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(IoError::ColumnCount {
                line: line_no,
                found: tokens.len(),
            });
        }

        let mut parsed = [0.0f64; 3];
        for (value, (token, column)) in parsed
            .iter_mut()
            .zip(tokens.iter().zip(["x", "y", "magnitude"]))
        {
            *value = token.parse().map_err(|_| IoError::InvalidNumber {
                line: line_no,
                token: token.to_string(),
            })?;
            if !value.is_finite() {
                return Err(IoError::NonFinite {
                    line: line_no,
                    column,
                    token: token.to_string(),
                });
            }
        }

        cloud.x.push(parsed[0]);
        cloud.y.push(parsed[1]);
        cloud.magnitude.push(parsed[2]);
    }

    Ok(cloud)
}

/// Load from a file path, or stdin when no path is given
pub fn load_path(path: Option<&Path>) -> IoResult<PointCloud> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| IoError::OpenFailed {
                path: path.display().to_string(),
                source,
            })?;
            load_columns(BufReader::new(file))
        }
        None => load_columns(io::stdin().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_basic() {
        let input = "0.5 -1.0 12.25\n1 2 3\n";
        let cloud = load_columns(input.as_bytes()).unwrap();

        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.x, vec![0.5, 1.0]);
        assert_eq!(cloud.y, vec![-1.0, 2.0]);
        assert_eq!(cloud.magnitude, vec![12.25, 3.0]);
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let input = "# header comment\n\n0 0 5.0\n   \n# trailing\n";
        let cloud = load_columns(input.as_bytes()).unwrap();

        assert_eq!(cloud.len(), 1);
        assert_eq!(cloud.magnitude, vec![5.0]);
    }

    #[test]
    fn test_handles_repeated_whitespace_and_tabs() {
        let input = "  1.0\t\t2.0   3.0  \n";
        let cloud = load_columns(input.as_bytes()).unwrap();
        assert_eq!(cloud.x, vec![1.0]);
    }

    #[test]
    fn test_empty_input() {
        let cloud = load_columns("".as_bytes()).unwrap();
        assert!(cloud.is_empty());
    }

    #[test]
    fn test_wrong_column_count() {
        let err = load_columns("1 2\n".as_bytes()).unwrap_err();
        match err {
            IoError::ColumnCount { line, found } => {
                assert_eq!(line, 1);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let err = load_columns("0 0 1\n0 zero 1\n".as_bytes()).unwrap_err();
        match err {
            IoError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "zero");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = load_columns("0 0 NaN\n".as_bytes()).unwrap_err();
        match err {
            IoError::NonFinite { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, "magnitude");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(load_columns("inf 0 1\n".as_bytes()).is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let err = load_path(Some(Path::new("/nonexistent/points.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/points.txt"));
    }
}
