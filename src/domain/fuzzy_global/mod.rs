//! Fuzzy global weight algorithms - Interval synthesis across a layer.
//!
//! Global fuzziness is tracked as an (L, U) interval per node; the modal band
//! of the local weights is not propagated.

mod distributed;

pub use distributed::FuzzyDistributedSynthesis;

use nalgebra::DMatrix;

use crate::domain::foundation::{HierarchyError, IntervalWeights};

/// Combines parent interval weights with their fuzzy local (L, U) bands.
pub trait FuzzyGlobalWeightAlgorithm: Send + Sync {
    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Computes the next layer's interval weights.
    ///
    /// `elements_lower` and `elements_upper` have one row per child and one
    /// column per criterion (parent node), holding each parent's local L / U
    /// weight for that child.
    fn synthesize_fuzzy_global(
        &self,
        criteria: &IntervalWeights,
        elements_lower: &DMatrix<f64>,
        elements_upper: &DMatrix<f64>,
    ) -> Result<IntervalWeights, HierarchyError>;
}
