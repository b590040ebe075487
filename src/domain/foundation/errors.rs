//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::{FuzzyBand, NodeRef};
use crate::ports::SolverError;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigurationError,
    DimensionMismatch,
    IndexOutOfRange,
    MissingData,
    SolverError,
    NoConvergence,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ConfigurationError => "CONFIGURATION_ERROR",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ErrorCode::MissingData => "MISSING_DATA",
            ErrorCode::SolverError => "SOLVER_ERROR",
            ErrorCode::NoConvergence => "NO_CONVERGENCE",
        };
        write!(f, "{}", s)
    }
}

/// Upstream artifact a computation pass depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Comparisons,
    FuzzyComparisons(FuzzyBand),
    LocalWeights,
    FuzzyLocalWeights,
    GlobalWeight,
    FuzzyGlobalWeight,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Comparisons => write!(f, "comparison matrix"),
            Artifact::FuzzyComparisons(band) => write!(f, "fuzzy comparison matrix ({})", band),
            Artifact::LocalWeights => write!(f, "local weights"),
            Artifact::FuzzyLocalWeights => write!(f, "fuzzy local weights"),
            Artifact::GlobalWeight => write!(f, "global weight"),
            Artifact::FuzzyGlobalWeight => write!(f, "fuzzy global weight"),
        }
    }
}

/// Errors raised while building a hierarchy or running a weight pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HierarchyError {
    #[error("Layer {layer} must contain at least one element")]
    Configuration { layer: usize },

    #[error("{subject} has shape {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        subject: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Layer index {layer} is out of range for a hierarchy of {num_layers} layers")]
    LayerOutOfRange { layer: usize, num_layers: usize },

    #[error("Element index {element} is out of range for layer {layer} with {count} elements")]
    ElementOutOfRange {
        layer: usize,
        element: usize,
        count: usize,
    },

    #[error("Missing {artifact} at node {node}")]
    MissingData { artifact: Artifact, node: NodeRef },

    #[error("Linear program solve failed: {0}")]
    Solver(#[from] SolverError),

    #[error("Power iteration did not converge within {iterations} iterations")]
    NoConvergence { iterations: usize },

    #[error("At node {node}: {source}")]
    AtNode {
        node: NodeRef,
        source: Box<HierarchyError>,
    },
}

impl HierarchyError {
    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(
        subject: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        HierarchyError::DimensionMismatch {
            subject,
            expected_rows: expected.0,
            expected_cols: expected.1,
            rows: actual.0,
            cols: actual.1,
        }
    }

    /// Creates a missing data error.
    pub fn missing(artifact: Artifact, node: NodeRef) -> Self {
        HierarchyError::MissingData { artifact, node }
    }

    /// Attaches the coordinates of the node whose computation failed.
    pub fn at(self, node: NodeRef) -> Self {
        match self {
            HierarchyError::AtNode { .. } | HierarchyError::MissingData { .. } => self,
            other => HierarchyError::AtNode {
                node,
                source: Box::new(other),
            },
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            HierarchyError::Configuration { .. } => ErrorCode::ConfigurationError,
            HierarchyError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            HierarchyError::LayerOutOfRange { .. } | HierarchyError::ElementOutOfRange { .. } => {
                ErrorCode::IndexOutOfRange
            }
            HierarchyError::MissingData { .. } => ErrorCode::MissingData,
            HierarchyError::Solver(_) => ErrorCode::SolverError,
            HierarchyError::NoConvergence { .. } => ErrorCode::NoConvergence,
            HierarchyError::AtNode { source, .. } => source.code(),
        }
    }

    /// Returns the offending node coordinates, if known.
    pub fn node(&self) -> Option<NodeRef> {
        match self {
            HierarchyError::MissingData { node, .. } | HierarchyError::AtNode { node, .. } => {
                Some(*node)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_displays_correctly() {
        let err = HierarchyError::Configuration { layer: 2 };
        assert_eq!(format!("{}", err), "Layer 2 must contain at least one element");
        assert_eq!(err.code(), ErrorCode::ConfigurationError);
    }

    #[test]
    fn dimension_mismatch_displays_shapes() {
        let err = HierarchyError::dimension_mismatch("comparison matrix", (2, 2), (3, 3));
        assert_eq!(
            format!("{}", err),
            "comparison matrix has shape 3x3, expected 2x2"
        );
    }

    #[test]
    fn missing_data_carries_coordinates() {
        let err = HierarchyError::missing(Artifact::LocalWeights, NodeRef::new(1, 0));
        assert_eq!(format!("{}", err), "Missing local weights at node (1, 0)");
        assert_eq!(err.node(), Some(NodeRef::new(1, 0)));
        assert_eq!(err.code(), ErrorCode::MissingData);
    }

    #[test]
    fn at_wraps_once_and_keeps_inner_code() {
        let err = HierarchyError::NoConvergence { iterations: 10 }
            .at(NodeRef::new(0, 0))
            .at(NodeRef::new(1, 1));

        assert_eq!(err.node(), Some(NodeRef::new(0, 0)));
        assert_eq!(err.code(), ErrorCode::NoConvergence);
    }

    #[test]
    fn solver_errors_convert_and_map_to_solver_code() {
        let err: HierarchyError = SolverError::Infeasible.into();
        assert_eq!(err.code(), ErrorCode::SolverError);
        assert_eq!(
            format!("{}", err),
            "Linear program solve failed: linear program is infeasible"
        );
    }

    #[test]
    fn index_errors_share_a_code() {
        let layer = HierarchyError::LayerOutOfRange { layer: 4, num_layers: 3 };
        let element = HierarchyError::ElementOutOfRange { layer: 1, element: 7, count: 3 };
        assert_eq!(layer.code(), ErrorCode::IndexOutOfRange);
        assert_eq!(element.code(), ErrorCode::IndexOutOfRange);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::MissingData), "MISSING_DATA");
        assert_eq!(format!("{}", ErrorCode::IndexOutOfRange), "INDEX_OUT_OF_RANGE");
    }
}
