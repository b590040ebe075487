//! Global weight algorithms - Synthesis of one layer's weights into the next.
//!
//! Both variants take the global weights of the current layer's nodes
//! (`criteria`) and a matrix whose columns are those nodes' local weight
//! vectors (`local`, rows = children), and return the children's global
//! weights normalized to sum 1.

mod distributed;
mod multiplicative;

pub use distributed::DistributedSynthesis;
pub use multiplicative::MultiplicativeSynthesis;

use nalgebra::{DMatrix, DVector};

use crate::domain::foundation::HierarchyError;

/// Combines parent global weights with their local weights.
pub trait GlobalWeightAlgorithm: Send + Sync {
    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Computes the next layer's global weights.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `local` has a column count different from `criteria`'s length.
    fn synthesize_global(
        &self,
        criteria: &DVector<f64>,
        local: &DMatrix<f64>,
    ) -> Result<DVector<f64>, HierarchyError>;
}

/// Checks that `local` has one column per criterion.
pub(crate) fn ensure_columns_match(
    criteria: &DVector<f64>,
    local: &DMatrix<f64>,
) -> Result<(), HierarchyError> {
    if local.ncols() != criteria.len() {
        return Err(HierarchyError::dimension_mismatch(
            "local weight matrix",
            (local.nrows(), criteria.len()),
            local.shape(),
        ));
    }
    Ok(())
}
