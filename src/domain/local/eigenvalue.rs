//! Eigenvalue method (Saaty).

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use super::{LocalWeightAlgorithm, LocalWeights};
use crate::domain::foundation::linalg::ensure_square;
use crate::domain::foundation::HierarchyError;

/// Default convergence threshold on the max-norm step of the power iteration.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default iteration budget for the power iteration.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Principal eigenvector weights with consistency index `(lambda_max - n) / (n - 1)`.
///
/// A positive matrix has a simple real dominant eigenvalue with a positive
/// eigenvector, so the power iteration is used to find it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenvalueMethod {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for EigenvalueMethod {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EigenvalueMethod {
    /// Creates the method with explicit iteration settings.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Returns the principal eigenvector (summing to 1) and its eigenvalue.
    fn principal_eigenpair(
        &self,
        comparisons: &DMatrix<f64>,
    ) -> Result<(DVector<f64>, f64), HierarchyError> {
        let n = comparisons.nrows();
        let mut weights = DVector::from_element(n, 1.0 / n as f64);

        for iteration in 1..=self.max_iterations {
            let product = comparisons * &weights;
            // With weights summing to 1, the sum of A·w estimates lambda.
            let lambda = product.sum();
            let next = product / lambda;
            let step = (&next - &weights).amax();
            weights = next;

            if step <= self.tolerance {
                debug!(iteration, lambda, "power iteration converged");
                let lambda_max = (comparisons * &weights).sum();
                return Ok((weights, lambda_max));
            }
        }

        Err(HierarchyError::NoConvergence {
            iterations: self.max_iterations,
        })
    }
}

impl LocalWeightAlgorithm for EigenvalueMethod {
    fn name(&self) -> &'static str {
        "Eigenvalue Method"
    }

    fn derive_local(&self, comparisons: &DMatrix<f64>) -> Result<LocalWeights, HierarchyError> {
        let n = ensure_square("comparison matrix", comparisons)?;
        if n == 1 {
            return Ok(LocalWeights::single());
        }

        let (weights, lambda_max) = self.principal_eigenpair(comparisons)?;
        let consistency = (lambda_max - n as f64) / (n as f64 - 1.0);

        Ok(LocalWeights::new(weights, consistency))
    }
}
