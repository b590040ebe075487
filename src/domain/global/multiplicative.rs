//! Multiplicative synthesis: weighted geometric aggregation.

use nalgebra::{DMatrix, DVector};

use super::{ensure_columns_match, GlobalWeightAlgorithm};
use crate::domain::foundation::linalg::normalized;
use crate::domain::foundation::HierarchyError;

/// `global_i = prod_p local[i, p] ^ criteria[p]`, renormalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplicativeSynthesis;

impl GlobalWeightAlgorithm for MultiplicativeSynthesis {
    fn name(&self) -> &'static str {
        "Multiplicative Synthesis"
    }

    fn synthesize_global(
        &self,
        criteria: &DVector<f64>,
        local: &DMatrix<f64>,
    ) -> Result<DVector<f64>, HierarchyError> {
        ensure_columns_match(criteria, local)?;

        let raw = DVector::from_fn(local.nrows(), |i, _| {
            criteria
                .iter()
                .enumerate()
                .map(|(p, &exponent)| local[(i, p)].powf(exponent))
                .product::<f64>()
        });

        Ok(normalized(raw))
    }
}
