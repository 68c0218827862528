//! Empirical Cumulative Distribution Function (ECDF)
//!
//! The ECDF is a step function that estimates the underlying CDF of a sample.
//! For a sample of n values, ECDF(x) = (number of values <= x) / n.
//!
//! Tied values all carry the same probability: for a run of k equal values,
//! every member of the run maps to (last 1-based rank of the run) / n. This
//! matches the counting definition |{v_j : v_j <= v_i}| / n without the
//! quadratic scan.

use serde::{Deserialize, Serialize};

/// Empirical Cumulative Distribution Function over a magnitude sample
///
/// Immutable after construction. Values are sorted ascending; `probabilities`
/// runs parallel to `values` and is non-decreasing with final element 1.0
/// whenever the sample is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecdf {
    /// Sorted magnitude values
    values: Vec<f64>,
    /// CDF value (0 to 1] at each sorted point
    probabilities: Vec<f64>,
}

impl Ecdf {
    /// Build an ECDF from a magnitude sample
    ///
    /// Inputs must be finite; the loader rejects NaN and infinities before
    /// data reaches this crate. Time complexity: O(n log n) for sorting.
    pub fn from_magnitudes(magnitudes: &[f64]) -> Self {
        let n = magnitudes.len();
        if n == 0 {
            return Self {
                values: Vec::new(),
                probabilities: Vec::new(),
            };
        }

        let mut values = magnitudes.to_vec();
        values.sort_by(f64::total_cmp);

        // Assign each run of equal values the rank of its last member.
        let mut probabilities = vec![0.0; n];
        let mut start = 0;
        while start < n {
            let mut end = start;
            while end + 1 < n && values[end + 1] == values[start] {
                end += 1;
            }
            let p = (end + 1) as f64 / n as f64;
            for slot in &mut probabilities[start..=end] {
                *slot = p;
            }
            start = end + 1;
        }

        Self {
            values,
            probabilities,
        }
    }

    /// Evaluate the ECDF at a point
    ///
    /// Returns the proportion of sample values <= x.
    /// Time complexity: O(log n)
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        match self.values.binary_search_by(|v| v.total_cmp(&x)) {
            // Ties share one probability, so any match index works.
            Ok(idx) => self.probabilities[idx],
            Err(0) => 0.0,
            Err(idx) => self.probabilities[idx - 1],
        }
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the ECDF is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest magnitude in the sample
    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Largest magnitude in the sample
    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Get the sorted values for plotting
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the CDF values for plotting
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// (magnitude, probability) pairs in ascending magnitude order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
    }
}
