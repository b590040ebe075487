//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `lp` - Linear program solvers (minilp, mock)

pub mod lp;

pub use lp::{MinilpSolver, MockSolver};
