use std::fmt;

use longmaze_core::Point;
use longmaze_graph::{Graph, GraphError};

/// A route found by a solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Decision nodes from begin to end.
    pub nodes: Vec<Point>,
    /// Hop count of the route.
    pub length: usize,
    /// Every grid cell of the route, begin and end included.
    pub cells: Vec<Point>,
}

impl Solution {
    /// Measure and expand a route of decision nodes.
    pub fn from_nodes(graph: &Graph, nodes: Vec<Point>) -> Result<Self, SolveError> {
        let length = graph.path_length(&nodes)?;
        let cells = graph.full_path(&nodes)?;
        Ok(Self {
            nodes,
            length,
            cells,
        })
    }

    /// The zero-length route used when begin and end are the same cell.
    pub(crate) fn single(p: Point) -> Self {
        Self {
            nodes: vec![p],
            length: 0,
            cells: vec![p],
        }
    }
}

/// A longest-path heuristic over a reduced graph.
pub trait Solver {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Search `graph` for a long simple route from its begin to its end.
    fn solve(&mut self, graph: &Graph) -> Result<Solution, SolveError>;
}

/// Errors returned by solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The solver spent its whole budget without reaching the end.
    NoSolutionFound { solver: &'static str },
    /// A found route could not be expanded through the graph.
    Graph(GraphError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolutionFound { solver } => write!(f, "{solver}: solution not found"),
            Self::Graph(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            Self::NoSolutionFound { .. } => None,
        }
    }
}

impl From<GraphError> for SolveError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}
