//! Fuzzy value objects: (L, M, U) triples and (L, U) intervals.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use super::linalg::ensure_square;
use super::{FuzzyBand, HierarchyError};

/// Triangular fuzzy pairwise comparisons as three band matrices.
///
/// Entrywise `lower <= modal <= upper` is a caller precondition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatrices {
    pub lower: DMatrix<f64>,
    pub modal: DMatrix<f64>,
    pub upper: DMatrix<f64>,
}

impl FuzzyMatrices {
    /// Creates a fuzzy comparison triple.
    pub fn new(lower: DMatrix<f64>, modal: DMatrix<f64>, upper: DMatrix<f64>) -> Self {
        Self { lower, modal, upper }
    }

    /// Builds a degenerate triple where all bands equal a crisp matrix.
    pub fn crisp(matrix: DMatrix<f64>) -> Self {
        Self {
            lower: matrix.clone(),
            modal: matrix.clone(),
            upper: matrix,
        }
    }

    /// Returns the matrix for one band.
    pub fn band(&self, band: FuzzyBand) -> &DMatrix<f64> {
        match band {
            FuzzyBand::Lower => &self.lower,
            FuzzyBand::Modal => &self.modal,
            FuzzyBand::Upper => &self.upper,
        }
    }

    /// Common dimension of the three bands.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if any band is not square or the bands disagree in size.
    pub fn dimension(&self) -> Result<usize, HierarchyError> {
        let n = ensure_square("lower fuzzy comparison matrix", &self.lower)?;
        for (subject, matrix) in [
            ("modal fuzzy comparison matrix", &self.modal),
            ("upper fuzzy comparison matrix", &self.upper),
        ] {
            if matrix.shape() != (n, n) {
                return Err(HierarchyError::dimension_mismatch(
                    subject,
                    (n, n),
                    matrix.shape(),
                ));
            }
        }
        Ok(n)
    }
}

/// Fuzzy local weights: one (L, M, U) entry per child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyWeights {
    pub lower: DVector<f64>,
    pub modal: DVector<f64>,
    pub upper: DVector<f64>,
}

impl FuzzyWeights {
    /// Creates a fuzzy weight triple.
    pub fn new(lower: DVector<f64>, modal: DVector<f64>, upper: DVector<f64>) -> Self {
        Self { lower, modal, upper }
    }

    /// Returns the vector for one band.
    pub fn band(&self, band: FuzzyBand) -> &DVector<f64> {
        match band {
            FuzzyBand::Lower => &self.lower,
            FuzzyBand::Modal => &self.modal,
            FuzzyBand::Upper => &self.upper,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.modal.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.modal.is_empty()
    }

    /// Checks `lower <= modal <= upper` for every entry, allowing `tolerance` slack.
    pub fn is_ordered(&self, tolerance: f64) -> bool {
        self.lower.len() == self.len()
            && self.upper.len() == self.len()
            && (0..self.len()).all(|i| {
                self.lower[i] <= self.modal[i] + tolerance
                    && self.modal[i] <= self.upper[i] + tolerance
            })
    }

    /// The (L, U) bands as interval weights; the modal band is dropped.
    pub fn to_intervals(&self) -> Result<IntervalWeights, HierarchyError> {
        IntervalWeights::new(self.lower.clone(), self.upper.clone())
    }
}

/// A closed interval weight `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// A degenerate interval holding a single value.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Interval weights for a layer: parallel lower and upper bound vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalWeights {
    lower: DVector<f64>,
    upper: DVector<f64>,
}

impl IntervalWeights {
    /// Creates interval weights from bound vectors of equal length.
    pub fn new(lower: DVector<f64>, upper: DVector<f64>) -> Result<Self, HierarchyError> {
        if lower.len() != upper.len() {
            return Err(HierarchyError::dimension_mismatch(
                "upper interval bounds",
                (lower.len(), 1),
                (upper.len(), 1),
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Builds interval weights from a list of intervals.
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        Self {
            lower: DVector::from_iterator(intervals.len(), intervals.iter().map(|i| i.lower)),
            upper: DVector::from_iterator(intervals.len(), intervals.iter().map(|i| i.upper)),
        }
    }

    /// Lower bounds.
    pub fn lower(&self) -> &DVector<f64> {
        &self.lower
    }

    /// Upper bounds.
    pub fn upper(&self) -> &DVector<f64> {
        &self.upper
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Returns true if there are no intervals.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// The interval at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Interval> {
        (index < self.len()).then(|| Interval::new(self.lower[index], self.upper[index]))
    }

    /// Iterates over all intervals in order.
    pub fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lower, &upper)| Interval::new(lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: usize, value: f64) -> DMatrix<f64> {
        DMatrix::from_element(n, n, value)
    }

    #[test]
    fn dimension_of_consistent_triple() {
        let triple = FuzzyMatrices::new(square(3, 1.0), square(3, 1.0), square(3, 1.0));
        assert_eq!(triple.dimension().unwrap(), 3);
    }

    #[test]
    fn dimension_rejects_mixed_sizes() {
        let triple = FuzzyMatrices::new(square(3, 1.0), square(2, 1.0), square(3, 1.0));
        let err = triple.dimension().unwrap_err();
        assert!(matches!(
            err,
            HierarchyError::DimensionMismatch {
                subject: "modal fuzzy comparison matrix",
                ..
            }
        ));
    }

    #[test]
    fn crisp_triple_has_equal_bands() {
        let triple = FuzzyMatrices::crisp(square(2, 1.0));
        assert_eq!(triple.band(FuzzyBand::Lower), triple.band(FuzzyBand::Upper));
    }

    #[test]
    fn ordering_check_detects_violation() {
        let ordered = FuzzyWeights::new(
            DVector::from_vec(vec![0.1, 0.2]),
            DVector::from_vec(vec![0.3, 0.4]),
            DVector::from_vec(vec![0.5, 0.6]),
        );
        assert!(ordered.is_ordered(0.0));

        let broken = FuzzyWeights::new(
            DVector::from_vec(vec![0.4, 0.2]),
            DVector::from_vec(vec![0.3, 0.4]),
            DVector::from_vec(vec![0.5, 0.6]),
        );
        assert!(!broken.is_ordered(1e-9));
    }

    #[test]
    fn to_intervals_drops_modal_band() {
        let weights = FuzzyWeights::new(
            DVector::from_vec(vec![0.1]),
            DVector::from_vec(vec![0.3]),
            DVector::from_vec(vec![0.5]),
        );
        let intervals = weights.to_intervals().unwrap();
        assert_eq!(intervals.get(0), Some(Interval::new(0.1, 0.5)));
        assert_eq!(intervals.get(1), None);
    }

    #[test]
    fn interval_weights_reject_length_mismatch() {
        let result = IntervalWeights::new(DVector::from_vec(vec![0.1]), DVector::from_vec(vec![]));
        assert!(result.is_err());
    }

    #[test]
    fn from_intervals_round_trips_through_iter() {
        let intervals = vec![Interval::new(0.1, 0.2), Interval::point(0.5)];
        let weights = IntervalWeights::from_intervals(&intervals);
        assert_eq!(weights.iter().collect::<Vec<_>>(), intervals);
        assert!((Interval::new(0.1, 0.4).width() - 0.3).abs() < 1e-12);
    }
}
