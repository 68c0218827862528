//! Point classification into labeled regions
//!
//! Each point is assigned one horizontal and one vertical band with
//! half-open comparisons, then its magnitude is appended to every region
//! whose band predicate it satisfies. Regions overlap: a north-east point
//! contributes to N, E and NE.

use crate::label::RegionLabel;
use crate::thresholds::RegionThresholds;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Horizontal band of a point (x axis)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HBand {
    /// x < east threshold
    East,
    /// east <= x < west
    Center,
    /// x >= west threshold
    West,
}

/// Vertical band of a point (y axis)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VBand {
    /// y < south threshold
    South,
    /// south <= y < north
    Center,
    /// y >= north threshold
    North,
}

impl HBand {
    /// Classify x into its band. The west test runs first so x == west == east
    /// still resolves deterministically to West.
    pub fn of(x: f64, thresholds: &RegionThresholds) -> Self {
        if x >= thresholds.west() {
            HBand::West
        } else if x < thresholds.east() {
            HBand::East
        } else {
            HBand::Center
        }
    }
}

impl VBand {
    /// Classify y into its band; north wins on y == north == south.
    pub fn of(y: f64, thresholds: &RegionThresholds) -> Self {
        if y >= thresholds.north() {
            VBand::North
        } else if y < thresholds.south() {
            VBand::South
        } else {
            VBand::Center
        }
    }
}

impl RegionLabel {
    /// Whether a point in the given bands belongs to this region
    pub fn contains(self, h: HBand, v: VBand) -> bool {
        match self {
            RegionLabel::C => h == HBand::Center && v == VBand::Center,
            RegionLabel::N => v == VBand::North,
            RegionLabel::S => v == VBand::South,
            RegionLabel::E => h == HBand::East,
            RegionLabel::W => h == HBand::West,
            RegionLabel::Nc => h == HBand::Center && v == VBand::North,
            RegionLabel::Sc => h == HBand::Center && v == VBand::South,
            RegionLabel::Ec => v == VBand::Center && h == HBand::East,
            RegionLabel::Wc => v == VBand::Center && h == HBand::West,
            RegionLabel::Ne => v == VBand::North && h == HBand::East,
            RegionLabel::Nw => v == VBand::North && h == HBand::West,
            RegionLabel::Se => v == VBand::South && h == HBand::East,
            RegionLabel::Sw => v == VBand::South && h == HBand::West,
        }
    }
}

/// Total map from region label to the magnitudes of its member points
///
/// Backed by a fixed array indexed by [`RegionLabel`], so every label has a
/// subset (possibly empty) and lookup cannot fail.
#[derive(Clone, Debug, Default)]
pub struct RegionSet {
    subsets: [Vec<f64>; RegionLabel::COUNT],
}

impl RegionSet {
    /// Magnitudes of the points in a region, in input order
    pub fn magnitudes(&self, label: RegionLabel) -> &[f64] {
        &self.subsets[label.index()]
    }

    /// Number of points in a region
    pub fn len(&self, label: RegionLabel) -> usize {
        self.subsets[label.index()].len()
    }

    /// Whether a region has no points
    pub fn is_empty(&self, label: RegionLabel) -> bool {
        self.subsets[label.index()].is_empty()
    }
}

/// Classify points into the 13 labeled regions
///
/// Columns are aligned by index; the i-th x, y and magnitude describe one
/// point. Panics if the columns disagree in length (the loader guarantees
/// they do not).
pub fn classify(
    x: &[f64],
    y: &[f64],
    magnitudes: &[f64],
    thresholds: &RegionThresholds,
) -> RegionSet {
    assert_eq!(x.len(), y.len());
    assert_eq!(x.len(), magnitudes.len());

    let bands: Vec<(HBand, VBand)> = x
        .iter()
        .zip(y)
        .map(|(&px, &py)| (HBand::of(px, thresholds), VBand::of(py, thresholds)))
        .collect();

    let extract = |label: RegionLabel| -> Vec<f64> {
        bands
            .iter()
            .zip(magnitudes)
            .filter(|((h, v), _)| label.contains(*h, *v))
            .map(|(_, &m)| m)
            .collect()
    };

    #[cfg(feature = "parallel")]
    let collected: Vec<Vec<f64>> = RegionLabel::ALL.par_iter().map(|&l| extract(l)).collect();

    #[cfg(not(feature = "parallel"))]
    let collected: Vec<Vec<f64>> = RegionLabel::ALL.iter().map(|&l| extract(l)).collect();

    let mut set = RegionSet::default();
    for (slot, subset) in set.subsets.iter_mut().zip(collected) {
        *slot = subset;
    }
    set
}
