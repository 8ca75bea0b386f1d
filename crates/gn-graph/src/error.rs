//! Graph-specific error types.

use gn_core::{EdgeId, GnError, NodeId};
use gn_network::PressureLevel;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge refers to a node that doesn't exist.
    InvalidNodeRef { edge: EdgeId, node: NodeId },

    /// An edge starts and ends on the same node.
    SelfLoop { edge: EdgeId, node: NodeId },

    /// A pipe endpoint is not a bus of the level being built.
    UnknownBus {
        level: PressureLevel,
        pipe: String,
        bus: String,
    },

    /// Two nodes of one level share a name.
    DuplicateNode { name: String },

    /// Part of a level has no fixed-pressure node.
    Unsupplied {
        level: PressureLevel,
        buses: Vec<String>,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef { edge, node } => {
                write!(f, "Edge {} refers to non-existent node {}", edge, node)
            }
            GraphError::SelfLoop { edge, node } => {
                write!(f, "Edge {} starts and ends at node {}", edge, node)
            }
            GraphError::UnknownBus { level, pipe, bus } => {
                write!(f, "Pipe {} refers to bus {} which is not on level {}", pipe, bus, level)
            }
            GraphError::DuplicateNode { name } => {
                write!(f, "Node name {} is used twice", name)
            }
            GraphError::Unsupplied { level, buses } => {
                write!(
                    f,
                    "Buses [{}] on level {} are not connected to any source",
                    buses.join(", "),
                    level
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for GnError {
    fn from(err: GraphError) -> Self {
        GnError::Invariant {
            what: err.to_string(),
        }
    }
}
