//! Mock LP solver for testing.
//!
//! Returns pre-configured results in order and records every program it
//! receives, so tests can drive LP-based algorithms without a real solver.
//!
//! # Example
//!
//! ```
//! use ahp_engine::adapters::lp::MockSolver;
//! use ahp_engine::ports::{LinearProgram, LinearProgramSolver, Sense, SolverError};
//!
//! let solver = MockSolver::new().with_error(SolverError::Infeasible);
//! let result = solver.solve(&LinearProgram::new(1, Sense::Minimize));
//!
//! assert_eq!(result, Err(SolverError::Infeasible));
//! assert_eq!(solver.call_count(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::{LinearProgram, LinearProgramSolver, LpSolution, SolverError};

/// Mock LP solver for testing.
///
/// An exhausted script yields `SolverError::Internal`.
#[derive(Debug, Default)]
pub struct MockSolver {
    /// Pre-configured results (consumed in order).
    results: Mutex<VecDeque<Result<LpSolution, SolverError>>>,
    /// Call history for verification.
    calls: Mutex<Vec<LinearProgram>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockSolver {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful solution to the script.
    pub fn with_solution(self, solution: LpSolution) -> Self {
        lock(&self.results).push_back(Ok(solution));
        self
    }

    /// Adds an error to the script.
    pub fn with_error(self, error: SolverError) -> Self {
        lock(&self.results).push_back(Err(error));
        self
    }

    /// Returns the number of programs solved so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded programs.
    pub fn calls(&self) -> Vec<LinearProgram> {
        lock(&self.calls).clone()
    }
}

impl LinearProgramSolver for MockSolver {
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolverError> {
        lock(&self.calls).push(program.clone());
        lock(&self.results).pop_front().unwrap_or_else(|| {
            Err(SolverError::Internal(
                "mock solver has no scripted result".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Sense;

    fn program() -> LinearProgram {
        LinearProgram::new(2, Sense::Minimize)
    }

    #[test]
    fn returns_scripted_results_in_order() {
        let solver = MockSolver::new()
            .with_solution(LpSolution {
                values: vec![1.0, 0.0],
                objective_value: 1.0,
            })
            .with_error(SolverError::Unbounded);

        assert_eq!(solver.solve(&program()).unwrap().objective_value, 1.0);
        assert_eq!(solver.solve(&program()), Err(SolverError::Unbounded));
    }

    #[test]
    fn exhausted_script_is_an_internal_error() {
        let solver = MockSolver::new();
        assert!(matches!(
            solver.solve(&program()),
            Err(SolverError::Internal(_))
        ));
    }

    #[test]
    fn records_every_program() {
        let solver = MockSolver::new();
        let _ = solver.solve(&program());
        let _ = solver.solve(&LinearProgram::new(5, Sense::Maximize));

        assert_eq!(solver.call_count(), 2);
        assert_eq!(solver.calls()[1].num_variables, 5);
    }
}
