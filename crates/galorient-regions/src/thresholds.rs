//! Region thresholds
//!
//! Four scalars split the plane into three bands per axis. Validated at
//! construction: south <= north and east <= west, so the bands tile each
//! axis with no gap. Equal thresholds are allowed and collapse the center
//! band to empty.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from threshold validation
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("south bound {south} exceeds north bound {north}")]
    SouthAboveNorth { south: f64, north: f64 },

    #[error("east bound {east} exceeds west bound {west}")]
    EastBeyondWest { east: f64, west: f64 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// Validated axis thresholds for the region partition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionThresholds {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

impl RegionThresholds {
    /// Build thresholds, enforcing south <= north and east <= west
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> RegionResult<Self> {
        if south > north {
            return Err(RegionError::SouthAboveNorth { south, north });
        }
        if east > west {
            return Err(RegionError::EastBeyondWest { east, west });
        }
        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// Lower bound of the north band (y >= north is north)
    pub fn north(&self) -> f64 {
        self.north
    }

    /// Upper bound of the south band (y < south is south)
    pub fn south(&self) -> f64 {
        self.south
    }

    /// Upper bound of the east band (x < east is east)
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Lower bound of the west band (x >= west is west)
    pub fn west(&self) -> f64 {
        self.west
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_thresholds() {
        assert!(RegionThresholds::new(1.0, -1.0, -1.0, 1.0).is_ok());
    }

    #[test]
    fn test_equal_thresholds_allowed() {
        // Degenerate center bands are fine, the partition stays total.
        assert!(RegionThresholds::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_south_above_north_rejected() {
        let err = RegionThresholds::new(1.0, 2.0, 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            RegionError::SouthAboveNorth {
                south: 2.0,
                north: 1.0
            }
        );
        assert!(err.to_string().contains("south bound 2"));
    }

    #[test]
    fn test_east_beyond_west_rejected() {
        let err = RegionThresholds::new(0.0, 0.0, 3.0, -3.0).unwrap_err();
        assert_eq!(
            err,
            RegionError::EastBeyondWest {
                east: 3.0,
                west: -3.0
            }
        );
    }
}
