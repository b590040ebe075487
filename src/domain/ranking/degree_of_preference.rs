//! Degree-of-preference ranking for interval weights.
//!
//! Compares every pair of intervals by how far one lies above the other,
//! relative to their combined width, and ranks by the summed preference.

use nalgebra::{DMatrix, DVector};

use super::FuzzyRankingAlgorithm;
use crate::domain::foundation::{Interval, IntervalWeights};

/// Pairwise degree-of-preference ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeOfPreference;

impl DegreeOfPreference {
    /// Degree to which `a` is preferred over `b`, in `[0, 1]`.
    pub fn degree_of_preference(a: Interval, b: Interval) -> f64 {
        let spread = a.width() + b.width();
        if spread == 0.0 {
            return if a.lower == b.lower {
                0.5
            } else if b.upper > a.lower {
                0.0
            } else {
                1.0
            };
        }
        let value = (b.upper - a.lower) / spread;
        (1.0 - value.max(0.0)).max(0.0)
    }

    /// Full preference matrix; entry `(i, j)` is the preference of `i` over `j`.
    pub fn preference_matrix(weights: &IntervalWeights) -> DMatrix<f64> {
        let intervals: Vec<Interval> = weights.iter().collect();
        let n = intervals.len();
        DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                0.5
            } else {
                Self::degree_of_preference(intervals[i], intervals[j])
            }
        })
    }

    /// Row sums of the preference matrix.
    pub fn scores(weights: &IntervalWeights) -> DVector<f64> {
        let matrix = Self::preference_matrix(weights);
        DVector::from_iterator(matrix.nrows(), matrix.row_iter().map(|row| row.sum()))
    }
}

impl FuzzyRankingAlgorithm for DegreeOfPreference {
    fn name(&self) -> &'static str {
        "Degree of Preference"
    }

    fn rank(&self, weights: &IntervalWeights) -> Vec<usize> {
        let scores = Self::scores(weights);
        let mut order: Vec<usize> = (0..scores.len()).collect();
        // sort_by is stable: equal scores keep their original order
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        order
    }
}
