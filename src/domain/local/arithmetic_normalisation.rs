//! Arithmetic normalisation method.

use nalgebra::{DMatrix, DVector};

use super::{LocalWeightAlgorithm, LocalWeights};
use crate::domain::foundation::linalg::{ensure_square, normalized};
use crate::domain::foundation::HierarchyError;

/// Reciprocal column sums with the harmonic consistency index (HCI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithmeticNormalisation;

impl LocalWeightAlgorithm for ArithmeticNormalisation {
    fn name(&self) -> &'static str {
        "Arithmetic Normalisation"
    }

    fn derive_local(&self, comparisons: &DMatrix<f64>) -> Result<LocalWeights, HierarchyError> {
        let n = ensure_square("comparison matrix", comparisons)?;
        if n == 1 {
            return Ok(LocalWeights::single());
        }

        let raw = DVector::from_fn(n, |j, _| 1.0 / comparisons.column(j).sum());

        // HCI is taken from the un-normalized vector.
        let size = n as f64;
        let harmonic_mean = size / raw.sum();
        let consistency = (harmonic_mean - size) * (size + 1.0) / (size * (size - 1.0));

        Ok(LocalWeights::new(normalized(raw), consistency))
    }
}
