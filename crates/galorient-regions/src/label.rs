//! Region labels
//!
//! The fixed 13-label vocabulary for threshold-partitioned regions. Using an
//! exhaustive enum instead of string keys makes an unknown-label lookup
//! unrepresentable; bad label strings are rejected at parse time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named region of the threshold partition
///
/// Single-letter labels select a full band (N is every point north of the
/// north threshold); two-letter labels intersect two bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionLabel {
    /// Center: both axes in their center band
    C,
    /// North band, any horizontal position
    N,
    /// South band, any horizontal position
    S,
    /// East band, any vertical position
    E,
    /// West band, any vertical position
    W,
    /// North-center: center column, north band
    Nc,
    /// South-center: center column, south band
    Sc,
    /// East-center: center row, east band
    Ec,
    /// West-center: center row, west band
    Wc,
    /// North-east corner
    Ne,
    /// North-west corner
    Nw,
    /// South-east corner
    Se,
    /// South-west corner
    Sw,
}

/// Error for label strings outside the fixed vocabulary
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown region label '{0}' (expected one of C, N, S, E, W, NC, SC, EC, WC, NE, NW, SE, SW)")]
pub struct ParseLabelError(pub String);

impl RegionLabel {
    /// All labels, in a fixed order usable as an array index
    pub const ALL: [RegionLabel; 13] = [
        RegionLabel::C,
        RegionLabel::N,
        RegionLabel::S,
        RegionLabel::E,
        RegionLabel::W,
        RegionLabel::Nc,
        RegionLabel::Sc,
        RegionLabel::Ec,
        RegionLabel::Wc,
        RegionLabel::Ne,
        RegionLabel::Nw,
        RegionLabel::Se,
        RegionLabel::Sw,
    ];

    /// Number of labels
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this label in [`RegionLabel::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical uppercase form of the label
    pub fn as_str(self) -> &'static str {
        match self {
            RegionLabel::C => "C",
            RegionLabel::N => "N",
            RegionLabel::S => "S",
            RegionLabel::E => "E",
            RegionLabel::W => "W",
            RegionLabel::Nc => "NC",
            RegionLabel::Sc => "SC",
            RegionLabel::Ec => "EC",
            RegionLabel::Wc => "WC",
            RegionLabel::Ne => "NE",
            RegionLabel::Nw => "NW",
            RegionLabel::Se => "SE",
            RegionLabel::Sw => "SW",
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| s.eq_ignore_ascii_case(label.as_str()))
            .ok_or_else(|| ParseLabelError(s.to_string()))
    }
}
