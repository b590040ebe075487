//! Local weight algorithms - Priority vectors from crisp comparison matrices.
//!
//! # Components
//!
//! - `EigenvalueMethod` - Principal eigenvector, Saaty consistency index
//! - `RowGeometricMean` - Row geometric means, geometric consistency index
//! - `ArithmeticNormalisation` - Reciprocal column sums, harmonic consistency index
//!
//! Every variant is stateless apart from numeric settings; the hierarchy only
//! calls [`LocalWeightAlgorithm::derive_local`].

mod arithmetic_normalisation;
mod eigenvalue;
mod row_geometric_mean;

pub use arithmetic_normalisation::ArithmeticNormalisation;
pub use eigenvalue::EigenvalueMethod;
pub use row_geometric_mean::RowGeometricMean;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::HierarchyError;

/// Weights derived from one comparison matrix plus its consistency measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalWeights {
    /// One entry per compared element, summing to 1.
    pub weights: DVector<f64>,
    pub consistency: f64,
}

impl LocalWeights {
    /// Creates a local weight result.
    pub fn new(weights: DVector<f64>, consistency: f64) -> Self {
        Self {
            weights,
            consistency,
        }
    }

    /// Result for a single compared element.
    pub(crate) fn single() -> Self {
        Self::new(DVector::from_element(1, 1.0), 0.0)
    }
}

/// Derives a local priority vector from a crisp pairwise comparison matrix.
pub trait LocalWeightAlgorithm: Send + Sync {
    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Computes weights and consistency for an n x n positive reciprocal matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the matrix is not square.
    fn derive_local(&self, comparisons: &DMatrix<f64>) -> Result<LocalWeights, HierarchyError>;
}
