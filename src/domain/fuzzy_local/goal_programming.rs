//! Goal programming model for fuzzy local weights.
//!
//! One linear program per node over `8n` variables laid out in blocks:
//!
//! ```text
//! [ e+ | e- | g+ | g- | delta | wL | wM | wU ]    each block has n entries
//! ```
//!
//! Constraints, for every row i:
//!
//! ```text
//! e+_i + e-_i + (n-1) wL_i - sum_j (AL_ij - [i=j]) wU_j = 0
//! g+_i + g-_i + (n-1) wU_i - sum_j (AU_ij - [i=j]) wL_j = 0
//! delta_i     - sum_j (AM_ij - n[i=j]) wM_j           = 0
//! wL_i + sum_{j!=i} wU_j >= 1
//! wU_i + sum_{j!=i} wL_j <= 1
//! wU_i - wM_i >= 0,  wM_i - wL_i >= 0
//! sum_i wM_i = 1
//! ```
//!
//! The objective minimizes the sum of all deviation variables.

use std::sync::Arc;

use nalgebra::DVector;
use tracing::{debug, warn};

use super::FuzzyLocalWeightAlgorithm;
use crate::domain::foundation::{FuzzyMatrices, FuzzyWeights, HierarchyError};
use crate::ports::{
    LinearConstraint, LinearProgram, LinearProgramSolver, LpSolution, Relation, Sense, SolverError,
};

/// Variable layout of the goal programming model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProgrammingLayout {
    n: usize,
}

impl GoalProgrammingLayout {
    /// Layout for an n x n comparison triple.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn num_variables(&self) -> usize {
        8 * self.n
    }

    /// Deviation variables occupy the first five blocks.
    pub fn num_deviations(&self) -> usize {
        5 * self.n
    }

    pub fn e_plus(&self, i: usize) -> usize {
        i
    }

    pub fn e_minus(&self, i: usize) -> usize {
        self.n + i
    }

    pub fn g_plus(&self, i: usize) -> usize {
        2 * self.n + i
    }

    pub fn g_minus(&self, i: usize) -> usize {
        3 * self.n + i
    }

    pub fn delta(&self, i: usize) -> usize {
        4 * self.n + i
    }

    pub fn w_lower(&self, i: usize) -> usize {
        5 * self.n + i
    }

    pub fn w_modal(&self, i: usize) -> usize {
        6 * self.n + i
    }

    pub fn w_upper(&self, i: usize) -> usize {
        7 * self.n + i
    }
}

/// Goal programming model solved through an injected LP solver.
///
/// The weight constraints are hard, so some reciprocal fuzzy triples
/// (mostly wide 3x3 ones) admit no feasible point. Those surface as
/// `HierarchyError::Solver(SolverError::Infeasible)`; whenever the model
/// solves, the result satisfies `lower <= modal <= upper`.
#[derive(Clone)]
pub struct GoalProgrammingModel {
    solver: Arc<dyn LinearProgramSolver>,
}

impl std::fmt::Debug for GoalProgrammingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoalProgrammingModel").finish_non_exhaustive()
    }
}

impl GoalProgrammingModel {
    /// Creates the model around a solver.
    pub fn new(solver: Arc<dyn LinearProgramSolver>) -> Self {
        Self { solver }
    }

    /// Builds the linear program for one comparison triple.
    ///
    /// Every call assembles its rows from scratch; nothing is shared between builds.
    pub fn build_program(comparisons: &FuzzyMatrices) -> Result<LinearProgram, HierarchyError> {
        let n = comparisons.dimension()?;
        let layout = GoalProgrammingLayout::new(n);
        let size = n as f64;
        let kronecker = |i: usize, j: usize| if i == j { 1.0 } else { 0.0 };

        let mut program = LinearProgram::new(layout.num_variables(), Sense::Minimize);

        for i in 0..n {
            let mut row = LinearConstraint::new(Relation::Equal, 0.0)
                .with_term(layout.e_plus(i), 1.0)
                .with_term(layout.e_minus(i), 1.0)
                .with_term(layout.w_lower(i), size - 1.0);
            for j in 0..n {
                row.add_term(
                    layout.w_upper(j),
                    -(comparisons.lower[(i, j)] - kronecker(i, j)),
                );
            }
            program.add_constraint(row);
        }

        for i in 0..n {
            let mut row = LinearConstraint::new(Relation::Equal, 0.0)
                .with_term(layout.g_plus(i), 1.0)
                .with_term(layout.g_minus(i), 1.0)
                .with_term(layout.w_upper(i), size - 1.0);
            for j in 0..n {
                row.add_term(
                    layout.w_lower(j),
                    -(comparisons.upper[(i, j)] - kronecker(i, j)),
                );
            }
            program.add_constraint(row);
        }

        for i in 0..n {
            let mut row =
                LinearConstraint::new(Relation::Equal, 0.0).with_term(layout.delta(i), 1.0);
            for j in 0..n {
                row.add_term(
                    layout.w_modal(j),
                    -(comparisons.modal[(i, j)] - size * kronecker(i, j)),
                );
            }
            program.add_constraint(row);
        }

        for i in 0..n {
            let mut row = LinearConstraint::new(Relation::GreaterOrEqual, 1.0)
                .with_term(layout.w_lower(i), 1.0);
            for j in (0..n).filter(|&j| j != i) {
                row.add_term(layout.w_upper(j), 1.0);
            }
            program.add_constraint(row);
        }

        for i in 0..n {
            let mut row = LinearConstraint::new(Relation::LessOrEqual, 1.0)
                .with_term(layout.w_upper(i), 1.0);
            for j in (0..n).filter(|&j| j != i) {
                row.add_term(layout.w_lower(j), 1.0);
            }
            program.add_constraint(row);
        }

        let mut simplex = LinearConstraint::new(Relation::Equal, 1.0);
        for j in 0..n {
            simplex.add_term(layout.w_modal(j), 1.0);
        }
        program.add_constraint(simplex);

        for i in 0..n {
            program.add_constraint(
                LinearConstraint::new(Relation::GreaterOrEqual, 0.0)
                    .with_term(layout.w_upper(i), 1.0)
                    .with_term(layout.w_modal(i), -1.0),
            );
            program.add_constraint(
                LinearConstraint::new(Relation::GreaterOrEqual, 0.0)
                    .with_term(layout.w_modal(i), 1.0)
                    .with_term(layout.w_lower(i), -1.0),
            );
        }

        for variable in 0..layout.num_deviations() {
            program.set_objective_coefficient(variable, 1.0);
        }

        Ok(program)
    }

    fn extract_weights(
        layout: GoalProgrammingLayout,
        n: usize,
        solution: &LpSolution,
    ) -> Result<FuzzyWeights, HierarchyError> {
        if solution.values.len() != layout.num_variables() {
            return Err(SolverError::Internal(format!(
                "expected {} variable values, solver returned {}",
                layout.num_variables(),
                solution.values.len()
            ))
            .into());
        }

        let block = |index: fn(&GoalProgrammingLayout, usize) -> usize| {
            DVector::from_fn(n, |i, _| solution.values[index(&layout, i)])
        };

        Ok(FuzzyWeights::new(
            block(GoalProgrammingLayout::w_lower),
            block(GoalProgrammingLayout::w_modal),
            block(GoalProgrammingLayout::w_upper),
        ))
    }
}

impl FuzzyLocalWeightAlgorithm for GoalProgrammingModel {
    fn name(&self) -> &'static str {
        "Goal Programming Model"
    }

    fn derive_fuzzy_local(
        &self,
        comparisons: &FuzzyMatrices,
    ) -> Result<FuzzyWeights, HierarchyError> {
        let program = Self::build_program(comparisons)?;
        let n = program.num_variables / 8;
        let layout = GoalProgrammingLayout::new(n);

        let solution = self.solver.solve(&program).map_err(|err| {
            warn!(error = %err, n, "goal programming model could not be solved");
            HierarchyError::from(err)
        })?;
        debug!(
            n,
            total_deviation = solution.objective_value,
            "goal programming model solved"
        );

        Self::extract_weights(layout, n, &solution)
    }
}
