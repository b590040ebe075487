//! Small matrix helpers shared by the weight algorithms.

use nalgebra::{DMatrix, DVector};

use super::HierarchyError;

/// Returns the dimension of a square matrix.
pub(crate) fn ensure_square(
    subject: &'static str,
    matrix: &DMatrix<f64>,
) -> Result<usize, HierarchyError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(HierarchyError::dimension_mismatch(
            subject,
            (rows, rows),
            (rows, cols),
        ));
    }
    Ok(rows)
}

/// Scales a vector so its entries sum to one.
pub(crate) fn normalized(vector: DVector<f64>) -> DVector<f64> {
    let sum = vector.sum();
    vector / sum
}

/// Unnormalized row geometric means, `(prod_j a_ij)^(1/n)`.
pub(crate) fn row_geometric_means(matrix: &DMatrix<f64>) -> DVector<f64> {
    let n = matrix.ncols() as f64;
    DVector::from_fn(matrix.nrows(), |i, _| {
        matrix.row(i).iter().product::<f64>().powf(1.0 / n)
    })
}
