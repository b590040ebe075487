//! Fuzzy row geometric mean method.

use super::FuzzyLocalWeightAlgorithm;
use crate::domain::foundation::linalg::row_geometric_means;
use crate::domain::foundation::{FuzzyMatrices, FuzzyWeights, HierarchyError};

/// Row geometric means per band, normalized across bands.
///
/// L is divided by the sum of the U band, M by the sum of the M band and
/// U by the sum of the L band, so `L <= M <= U` survives normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzyRowGeometricMean;

impl FuzzyLocalWeightAlgorithm for FuzzyRowGeometricMean {
    fn name(&self) -> &'static str {
        "Fuzzy Row Geometric Mean Method"
    }

    fn derive_fuzzy_local(
        &self,
        comparisons: &FuzzyMatrices,
    ) -> Result<FuzzyWeights, HierarchyError> {
        comparisons.dimension()?;

        let lower = row_geometric_means(&comparisons.lower);
        let modal = row_geometric_means(&comparisons.modal);
        let upper = row_geometric_means(&comparisons.upper);

        let lower_sum = lower.sum();
        let modal_sum = modal.sum();
        let upper_sum = upper.sum();

        Ok(FuzzyWeights::new(
            lower / upper_sum,
            modal / modal_sum,
            upper / lower_sum,
        ))
    }
}
