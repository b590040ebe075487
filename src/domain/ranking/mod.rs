//! Fuzzy ranking - Ordering alternatives by their interval global weights.

mod degree_of_preference;

pub use degree_of_preference::DegreeOfPreference;

use crate::domain::foundation::IntervalWeights;

/// Ranks a set of interval weights.
pub trait FuzzyRankingAlgorithm: Send + Sync {
    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Returns the original indices ordered from best to worst.
    fn rank(&self, weights: &IntervalWeights) -> Vec<usize>;
}
