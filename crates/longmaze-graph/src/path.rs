use longmaze_core::Point;

use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::Graph;

impl Graph {
    /// Total hop count of a route given as a sequence of decision nodes.
    ///
    /// Each consecutive pair contributes the weight of the first edge that
    /// joins them.
    pub fn path_length(&self, path: &[Point]) -> Result<usize, GraphError> {
        path.windows(2)
            .map(|w| self.step(w[0], w[1]).map(Edge::weight))
            .sum()
    }

    /// Expand a route of decision nodes into every grid cell it crosses.
    ///
    /// The result starts with `path[0]` and ends with the last node; an empty
    /// route expands to an empty list.
    pub fn full_path(&self, path: &[Point]) -> Result<Vec<Point>, GraphError> {
        let Some(&first) = path.first() else {
            return Ok(Vec::new());
        };
        let mut cells = vec![first];
        for w in path.windows(2) {
            let e = self.step(w[0], w[1])?;
            cells.extend_from_slice(&e.cells()[1..]);
        }
        Ok(cells)
    }

    fn step(&self, from: Point, to: Point) -> Result<&Edge, GraphError> {
        self.edge(from, to)
            .ok_or(GraphError::MissingEdge { from, to })
    }
}
