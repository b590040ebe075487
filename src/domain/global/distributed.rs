//! Distributed synthesis: weighted arithmetic aggregation.

use nalgebra::{DMatrix, DVector};

use super::{ensure_columns_match, GlobalWeightAlgorithm};
use crate::domain::foundation::linalg::normalized;
use crate::domain::foundation::HierarchyError;

/// `global = local · criteria`, renormalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributedSynthesis;

impl GlobalWeightAlgorithm for DistributedSynthesis {
    fn name(&self) -> &'static str {
        "Distributed Synthesis"
    }

    fn synthesize_global(
        &self,
        criteria: &DVector<f64>,
        local: &DMatrix<f64>,
    ) -> Result<DVector<f64>, HierarchyError> {
        ensure_columns_match(criteria, local)?;
        Ok(normalized(local * criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_sum_of_columns() {
        let criteria = DVector::from_vec(vec![0.6, 0.4]);
        let local = DMatrix::from_row_slice(2, 2, &[0.5, 0.25, 0.5, 0.75]);

        let global = DistributedSynthesis.synthesize_global(&criteria, &local).unwrap();

        assert!((global[0] - 0.4).abs() < 1e-12);
        assert!((global[1] - 0.6).abs() < 1e-12);
        assert!((global.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_column_count_mismatch() {
        let criteria = DVector::from_vec(vec![0.5, 0.3, 0.2]);
        let local = DMatrix::from_element(2, 2, 0.5);
        let err = DistributedSynthesis
            .synthesize_global(&criteria, &local)
            .unwrap_err();
        assert!(matches!(err, HierarchyError::DimensionMismatch { .. }));
    }
}
