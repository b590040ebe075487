//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LinearProgramSolver` - Port for solving generic linear programs

mod lp_solver;

pub use lp_solver::{
    LinearConstraint, LinearObjective, LinearProgram, LinearProgramSolver, LpSolution, Relation,
    Sense, SolverError,
};
