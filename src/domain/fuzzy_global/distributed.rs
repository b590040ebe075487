//! Fuzzy distributed synthesis via paired linear programs.

use std::sync::Arc;

use nalgebra::{DMatrix, DVector};
use tracing::{debug, warn};

use super::FuzzyGlobalWeightAlgorithm;
use crate::domain::foundation::{HierarchyError, IntervalWeights};
use crate::ports::{LinearConstraint, LinearProgram, LinearProgramSolver, Relation, Sense};

/// For every alternative, the lowest and highest achievable weighted sum.
///
/// The feasible region is the set of criterion weight vectors inside the
/// criteria intervals that sum to 1. The global lower bound minimizes the
/// alternative's L-row over it; the upper bound maximizes its U-row.
#[derive(Clone)]
pub struct FuzzyDistributedSynthesis {
    solver: Arc<dyn LinearProgramSolver>,
}

impl std::fmt::Debug for FuzzyDistributedSynthesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyDistributedSynthesis").finish_non_exhaustive()
    }
}

impl FuzzyDistributedSynthesis {
    /// Creates the synthesis around a solver.
    pub fn new(solver: Arc<dyn LinearProgramSolver>) -> Self {
        Self { solver }
    }

    /// Builds one bound program: criteria intervals, unit sum, objective = `row`.
    pub fn build_program(criteria: &IntervalWeights, row: &[f64], sense: Sense) -> LinearProgram {
        let mut program = LinearProgram::new(criteria.len(), sense);

        for (c, interval) in criteria.iter().enumerate() {
            program.add_constraint(
                LinearConstraint::new(Relation::LessOrEqual, interval.upper).with_term(c, 1.0),
            );
            program.add_constraint(
                LinearConstraint::new(Relation::GreaterOrEqual, interval.lower).with_term(c, 1.0),
            );
        }

        let mut simplex = LinearConstraint::new(Relation::Equal, 1.0);
        for c in 0..criteria.len() {
            simplex.add_term(c, 1.0);
        }
        program.add_constraint(simplex);

        for (c, &coefficient) in row.iter().enumerate() {
            program.set_objective_coefficient(c, coefficient);
        }

        program
    }

    fn solve_bound(
        &self,
        criteria: &IntervalWeights,
        row: &[f64],
        sense: Sense,
        alternative: usize,
    ) -> Result<f64, HierarchyError> {
        let program = Self::build_program(criteria, row, sense);
        let solution = self.solver.solve(&program).map_err(|err| {
            warn!(error = %err, alternative, ?sense, "global bound program could not be solved");
            HierarchyError::from(err)
        })?;
        Ok(solution.objective_value)
    }
}

impl FuzzyGlobalWeightAlgorithm for FuzzyDistributedSynthesis {
    fn name(&self) -> &'static str {
        "Fuzzy Distributed Synthesis"
    }

    fn synthesize_fuzzy_global(
        &self,
        criteria: &IntervalWeights,
        elements_lower: &DMatrix<f64>,
        elements_upper: &DMatrix<f64>,
    ) -> Result<IntervalWeights, HierarchyError> {
        let expected = (elements_lower.nrows(), criteria.len());
        if elements_lower.shape() != expected {
            return Err(HierarchyError::dimension_mismatch(
                "lower element weight matrix",
                expected,
                elements_lower.shape(),
            ));
        }
        if elements_upper.shape() != expected {
            return Err(HierarchyError::dimension_mismatch(
                "upper element weight matrix",
                expected,
                elements_upper.shape(),
            ));
        }

        let alternatives = elements_lower.nrows();
        let mut lower = DVector::zeros(alternatives);
        let mut upper = DVector::zeros(alternatives);

        for alternative in 0..alternatives {
            let row_lower: Vec<f64> = elements_lower.row(alternative).iter().copied().collect();
            let row_upper: Vec<f64> = elements_upper.row(alternative).iter().copied().collect();

            lower[alternative] =
                self.solve_bound(criteria, &row_lower, Sense::Minimize, alternative)?;
            upper[alternative] =
                self.solve_bound(criteria, &row_upper, Sense::Maximize, alternative)?;

            debug!(
                alternative,
                lower = lower[alternative],
                upper = upper[alternative],
                "interval global weight computed"
            );
        }

        IntervalWeights::new(lower, upper)
    }
}
