//! Row geometric mean method.

use nalgebra::DMatrix;

use super::{LocalWeightAlgorithm, LocalWeights};
use crate::domain::foundation::linalg::{ensure_square, normalized, row_geometric_means};
use crate::domain::foundation::HierarchyError;

/// Normalized row geometric means with the geometric consistency index (GCI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowGeometricMean;

impl LocalWeightAlgorithm for RowGeometricMean {
    fn name(&self) -> &'static str {
        "Row Geometric Mean Method"
    }

    fn derive_local(&self, comparisons: &DMatrix<f64>) -> Result<LocalWeights, HierarchyError> {
        let n = ensure_square("comparison matrix", comparisons)?;
        if n == 1 {
            return Ok(LocalWeights::single());
        }

        let weights = normalized(row_geometric_means(comparisons));

        // GCI = 2 / ((n-1)(n-2)) * sum_{i<j} ln^2(a_ij * w_j / w_i); zero for n = 2.
        let consistency = if n == 2 {
            0.0
        } else {
            let mut sum = 0.0;
            for i in 0..n {
                for j in (i + 1)..n {
                    let error = comparisons[(i, j)] * weights[j] / weights[i];
                    sum += error.ln().powi(2);
                }
            }
            2.0 / ((n as f64 - 1.0) * (n as f64 - 2.0)) * sum
        };

        Ok(LocalWeights::new(weights, consistency))
    }
}
