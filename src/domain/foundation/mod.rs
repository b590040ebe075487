//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, coordinates, and error types
//! that form the vocabulary of the weight engine.

mod band;
mod errors;
mod fuzzy;
pub(crate) mod linalg;
mod node_ref;

pub use band::FuzzyBand;
pub use errors::{Artifact, ErrorCode, HierarchyError};
pub use fuzzy::{FuzzyMatrices, FuzzyWeights, Interval, IntervalWeights};
pub use node_ref::NodeRef;
