//! Hierarchy - The layered decision model and its propagation passes.
//!
//! # Components
//!
//! - `Node` - One decision element with its judgments and results
//! - `HierarchyModel` - Flat arena of nodes, judgment storage, passes

mod model;
mod node;

pub use model::HierarchyModel;
pub use node::Node;
