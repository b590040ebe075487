//! Fuzzy local weight algorithms - (L, M, U) priorities from fuzzy judgments.
//!
//! # Components
//!
//! - `FuzzyRowGeometricMean` - Per-band row geometric means, cross-band normalization
//! - `GoalProgrammingModel` - One linear program per node minimizing total inconsistency
//!
//! Results always satisfy `lower <= modal <= upper` entrywise.

mod goal_programming;
mod row_geometric_mean;

pub use goal_programming::GoalProgrammingModel;
pub use row_geometric_mean::FuzzyRowGeometricMean;

use crate::domain::foundation::{FuzzyMatrices, FuzzyWeights, HierarchyError};

/// Derives fuzzy local weights from a triangular fuzzy comparison triple.
pub trait FuzzyLocalWeightAlgorithm: Send + Sync {
    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Computes the (L, M, U) weight vectors.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the bands are not square or differ in size;
    /// `Solver` if an LP-based method cannot solve its model.
    fn derive_fuzzy_local(
        &self,
        comparisons: &FuzzyMatrices,
    ) -> Result<FuzzyWeights, HierarchyError>;
}
