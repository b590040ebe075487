//! Node coordinates within a hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a node as `(layer, element)`; the goal is `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeRef {
    pub layer: usize,
    pub element: usize,
}

impl NodeRef {
    /// Creates a new node reference.
    pub fn new(layer: usize, element: usize) -> Self {
        Self { layer, element }
    }

    /// The goal node.
    pub fn goal() -> Self {
        Self::new(0, 0)
    }

    /// Returns true if this is the goal node.
    pub fn is_goal(&self) -> bool {
        self.layer == 0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.layer, self.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_is_origin() {
        assert_eq!(NodeRef::goal(), NodeRef::new(0, 0));
        assert!(NodeRef::goal().is_goal());
        assert!(!NodeRef::new(1, 0).is_goal());
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(format!("{}", NodeRef::new(2, 5)), "(2, 5)");
    }
}
