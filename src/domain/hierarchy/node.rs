//! Node - A single decision element and the results derived for it.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Artifact, FuzzyBand, FuzzyMatrices, FuzzyWeights, HierarchyError, Interval, NodeRef,
};
use crate::domain::local::LocalWeights;

/// A goal, criterion or alternative.
///
/// A node with children holds the judgments it makes among them (crisp
/// and/or fuzzy) and the local weights derived from those judgments. Every
/// node may receive a global weight from the propagation passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    name: Option<String>,
    comparisons: Option<DMatrix<f64>>,
    fuzzy_comparisons: [Option<DMatrix<f64>>; 3],
    local_weights: Option<DVector<f64>>,
    consistency_index: Option<f64>,
    fuzzy_local_weights: Option<FuzzyWeights>,
    global_weight: Option<f64>,
    fuzzy_global_weight: Option<Interval>,
}

impl Node {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn comparisons(&self) -> Option<&DMatrix<f64>> {
        self.comparisons.as_ref()
    }

    pub fn fuzzy_comparisons(&self, band: FuzzyBand) -> Option<&DMatrix<f64>> {
        self.fuzzy_comparisons[band.index()].as_ref()
    }

    pub fn local_weights(&self) -> Option<&DVector<f64>> {
        self.local_weights.as_ref()
    }

    pub fn consistency_index(&self) -> Option<f64> {
        self.consistency_index
    }

    pub fn fuzzy_local_weights(&self) -> Option<&FuzzyWeights> {
        self.fuzzy_local_weights.as_ref()
    }

    pub fn global_weight(&self) -> Option<f64> {
        self.global_weight
    }

    pub fn fuzzy_global_weight(&self) -> Option<Interval> {
        self.fuzzy_global_weight
    }

    /// Returns true once all three fuzzy bands have been set.
    pub fn has_fuzzy_comparisons(&self) -> bool {
        self.fuzzy_comparisons.iter().all(Option::is_some)
    }

    /// The complete fuzzy comparison triple.
    ///
    /// # Errors
    ///
    /// `MissingData` naming the first absent band.
    pub fn fuzzy_comparison_triple(&self, at: NodeRef) -> Result<FuzzyMatrices, HierarchyError> {
        let band = |band: FuzzyBand| {
            self.fuzzy_comparisons(band)
                .cloned()
                .ok_or_else(|| HierarchyError::missing(Artifact::FuzzyComparisons(band), at))
        };
        Ok(FuzzyMatrices::new(
            band(FuzzyBand::Lower)?,
            band(FuzzyBand::Modal)?,
            band(FuzzyBand::Upper)?,
        ))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutation (through the owning hierarchy only)
    // ─────────────────────────────────────────────────────────────────────

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn set_comparisons(&mut self, matrix: DMatrix<f64>) {
        self.comparisons = Some(matrix);
    }

    pub(crate) fn set_fuzzy_comparisons(&mut self, band: FuzzyBand, matrix: DMatrix<f64>) {
        self.fuzzy_comparisons[band.index()] = Some(matrix);
    }

    pub(crate) fn set_local(&mut self, local: LocalWeights) {
        self.local_weights = Some(local.weights);
        self.consistency_index = Some(local.consistency);
    }

    pub(crate) fn set_fuzzy_local(&mut self, weights: FuzzyWeights) {
        self.fuzzy_local_weights = Some(weights);
    }

    pub(crate) fn set_global_weight(&mut self, weight: f64) {
        self.global_weight = Some(weight);
    }

    pub(crate) fn set_fuzzy_global_weight(&mut self, weight: Interval) {
        self.fuzzy_global_weight = Some(weight);
    }
}
