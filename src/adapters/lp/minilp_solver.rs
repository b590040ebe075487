//! minilp-backed LP solver.
//!
//! Each call translates the port's program into a fresh `minilp::Problem`,
//! so no state is shared between solves. The solve runs on a worker thread
//! and is abandoned once the configured timeout elapses.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};
use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::ports::{LinearProgram, LinearProgramSolver, LpSolution, Relation, Sense, SolverError};

/// LP solver using the pure-Rust `minilp` simplex implementation.
#[derive(Debug, Clone)]
pub struct MinilpSolver {
    timeout: Duration,
}

impl MinilpSolver {
    /// Creates a solver that gives up on any single solve after `timeout`.
    ///
    /// A timed-out solve cannot be cancelled: its `lp-solve` worker thread
    /// runs to completion in the background. Very short timeouts on hard
    /// programs can therefore accumulate threads.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Creates a solver from the solver configuration section.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.timeout())
    }

    /// Per-solve timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for MinilpSolver {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

impl LinearProgramSolver for MinilpSolver {
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolverError> {
        program.validate()?;

        let program = program.clone();
        let result = run_with_timeout(self.timeout, move || solve_program(&program));

        match &result {
            Ok(solution) => debug!(objective = solution.objective_value, "linear program solved"),
            Err(err) => warn!(error = %err, "linear program solve failed"),
        }
        result
    }
}

/// Runs `job` on a worker thread, waiting at most `timeout` for its result.
///
/// A job that outlives the timeout keeps running detached; its result is dropped.
fn run_with_timeout<F>(timeout: Duration, job: F) -> Result<LpSolution, SolverError>
where
    F: FnOnce() -> Result<LpSolution, SolverError> + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name("lp-solve".to_string())
        .spawn(move || {
            // The receiver is gone if the caller already timed out.
            let _ = sender.send(job());
        })
        .map_err(|err| SolverError::Internal(format!("failed to spawn solver thread: {}", err)))?;

    match receiver.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(SolverError::Timeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(SolverError::Internal(
            "solver thread terminated without a result".to_string(),
        )),
    }
}

fn solve_program(program: &LinearProgram) -> Result<LpSolution, SolverError> {
    let direction = match program.objective.sense {
        Sense::Minimize => OptimizationDirection::Minimize,
        Sense::Maximize => OptimizationDirection::Maximize,
    };
    let mut problem = Problem::new(direction);

    let variables: Vec<_> = (0..program.num_variables)
        .map(|index| problem.add_var(program.objective.coefficient(index), (0.0, f64::INFINITY)))
        .collect();

    for constraint in &program.constraints {
        let mut expr = LinearExpr::empty();
        for (&index, &coefficient) in &constraint.coefficients {
            expr.add(variables[index], coefficient);
        }
        let op = match constraint.relation {
            Relation::LessOrEqual => ComparisonOp::Le,
            Relation::GreaterOrEqual => ComparisonOp::Ge,
            Relation::Equal => ComparisonOp::Eq,
        };
        problem.add_constraint(expr, op, constraint.rhs);
    }

    let solution = problem.solve().map_err(|err| match err {
        minilp::Error::Infeasible => SolverError::Infeasible,
        minilp::Error::Unbounded => SolverError::Unbounded,
        #[allow(unreachable_patterns)]
        other => SolverError::Internal(other.to_string()),
    })?;

    Ok(LpSolution {
        values: variables.iter().map(|&var| solution[var]).collect(),
        objective_value: solution.objective(),
    })
}
