//! Domain layer containing the weight engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (coordinates, fuzzy values, errors)
//! - `hierarchy` - Layered decision model and propagation passes
//! - `local` - Crisp local weight algorithms
//! - `global` - Crisp global synthesis algorithms
//! - `fuzzy_local` - Fuzzy local weight algorithms
//! - `fuzzy_global` - Interval global synthesis algorithms
//! - `ranking` - Ranking of interval weights

pub mod foundation;
pub mod fuzzy_global;
pub mod fuzzy_local;
pub mod global;
pub mod hierarchy;
pub mod local;
pub mod ranking;
