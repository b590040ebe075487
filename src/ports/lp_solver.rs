//! Linear program solver port - Interface for LP solving backends.
//!
//! The goal programming model and the fuzzy distributed synthesis both
//! reduce to small linear programs. This port describes a generic program
//! and lets any optimization library solve it without the domain knowing
//! which one.
//!
//! # Conventions
//!
//! - Variables are indexed from 0 and bounded below by 0.
//! - Coefficients are sparse; absent indices are zero.
//! - Every call to [`LinearProgramSolver::solve`] is an isolated session.
//!
//! # Example
//!
//! ```
//! use ahp_engine::ports::{LinearConstraint, LinearProgram, Relation, Sense};
//!
//! // maximize x0 + 2 x1  s.t.  x0 + x1 <= 4
//! let mut program = LinearProgram::new(2, Sense::Maximize);
//! program.set_objective_coefficient(0, 1.0);
//! program.set_objective_coefficient(1, 2.0);
//! program.add_constraint(
//!     LinearConstraint::new(Relation::LessOrEqual, 4.0)
//!         .with_term(0, 1.0)
//!         .with_term(1, 1.0),
//! );
//! assert_eq!(program.constraints.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Port for solving linear programs.
pub trait LinearProgramSolver: Send + Sync {
    /// Solve the program, returning variable values and the objective value.
    fn solve(&self, program: &LinearProgram) -> Result<LpSolution, SolverError>;
}

/// Relation between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sense {
    Minimize,
    Maximize,
}

/// A single linear constraint `sum(coefficients[i] * x_i) <relation> rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub coefficients: BTreeMap<usize, f64>,
    pub relation: Relation,
    pub rhs: f64,
}

impl LinearConstraint {
    /// Creates a constraint with no terms.
    pub fn new(relation: Relation, rhs: f64) -> Self {
        Self {
            coefficients: BTreeMap::new(),
            relation,
            rhs,
        }
    }

    /// Adds `coefficient * x_variable` to the left-hand side.
    pub fn with_term(mut self, variable: usize, coefficient: f64) -> Self {
        self.add_term(variable, coefficient);
        self
    }

    /// Adds `coefficient * x_variable` to the left-hand side in place.
    pub fn add_term(&mut self, variable: usize, coefficient: f64) {
        *self.coefficients.entry(variable).or_insert(0.0) += coefficient;
    }

    /// Coefficient of a variable (zero if absent).
    pub fn coefficient(&self, variable: usize) -> f64 {
        self.coefficients.get(&variable).copied().unwrap_or(0.0)
    }
}

/// Linear objective function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearObjective {
    pub coefficients: BTreeMap<usize, f64>,
    pub sense: Sense,
}

impl LinearObjective {
    /// Coefficient of a variable (zero if absent).
    pub fn coefficient(&self, variable: usize) -> f64 {
        self.coefficients.get(&variable).copied().unwrap_or(0.0)
    }
}

/// A complete linear program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    pub num_variables: usize,
    pub constraints: Vec<LinearConstraint>,
    pub objective: LinearObjective,
}

impl LinearProgram {
    /// Creates an empty program over `num_variables` non-negative variables.
    pub fn new(num_variables: usize, sense: Sense) -> Self {
        Self {
            num_variables,
            constraints: Vec::new(),
            objective: LinearObjective {
                coefficients: BTreeMap::new(),
                sense,
            },
        }
    }

    /// Appends a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Sets the objective coefficient of a variable.
    pub fn set_objective_coefficient(&mut self, variable: usize, coefficient: f64) {
        self.objective.coefficients.insert(variable, coefficient);
    }

    /// Checks that every referenced variable exists and every number is finite.
    pub fn validate(&self) -> Result<(), SolverError> {
        let check_terms = |terms: &BTreeMap<usize, f64>, what: &str| {
            for (&variable, &coefficient) in terms {
                if variable >= self.num_variables {
                    return Err(SolverError::InvalidProgram(format!(
                        "{} references variable {} but the program has {}",
                        what, variable, self.num_variables
                    )));
                }
                if !coefficient.is_finite() {
                    return Err(SolverError::InvalidProgram(format!(
                        "{} has non-finite coefficient for variable {}",
                        what, variable
                    )));
                }
            }
            Ok(())
        };

        check_terms(&self.objective.coefficients, "objective")?;
        for (index, constraint) in self.constraints.iter().enumerate() {
            check_terms(&constraint.coefficients, &format!("constraint {}", index))?;
            if !constraint.rhs.is_finite() {
                return Err(SolverError::InvalidProgram(format!(
                    "constraint {} has a non-finite right-hand side",
                    index
                )));
            }
        }
        Ok(())
    }
}

/// Optimal solution of a linear program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpSolution {
    /// Value of each variable, indexed like the program's variables.
    pub values: Vec<f64>,
    pub objective_value: f64,
}

/// Errors reported by an LP solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("linear program is infeasible")]
    Infeasible,

    #[error("linear program is unbounded")]
    Unbounded,

    #[error("solve timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("invalid linear program: {0}")]
    InvalidProgram(String),

    #[error("solver failure: {0}")]
    Internal(String),
}
