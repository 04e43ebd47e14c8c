use std::fmt;

use longmaze_core::Point;

/// Errors returned by path queries on a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two consecutive path nodes are not joined by any edge.
    MissingEdge { from: Point, to: Point },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEdge { from, to } => write!(f, "graph: no edge from {from} to {to}"),
        }
    }
}

impl std::error::Error for GraphError {}
