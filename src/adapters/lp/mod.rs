//! Linear program solver adapters.
//!
//! Implementations of the LinearProgramSolver port.
//!
//! ## Available Adapters
//!
//! - `MinilpSolver` - Dense simplex from the `minilp` crate, with a per-solve timeout
//! - `MockSolver` - Scripted results and call recording for tests

mod minilp_solver;
mod mock_solver;

pub use minilp_solver::MinilpSolver;
pub use mock_solver::MockSolver;
