use std::fmt;

use longmaze_core::Point;

/// A corridor between two decision nodes.
///
/// The coordinate run is endpoint-inclusive and always holds at least two
/// cells: `source()` is the first cell, `target()` the last. The weight of
/// the corridor is its hop count, `len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    cells: Vec<Point>,
}

impl Edge {
    /// Create an edge from a coordinate run of at least two cells.
    pub fn new(cells: Vec<Point>) -> Self {
        debug_assert!(cells.len() >= 2, "edge needs at least two cells");
        Self { cells }
    }

    /// A single-hop edge between two adjacent cells.
    #[inline]
    pub fn unit(from: Point, to: Point) -> Self {
        Self {
            cells: vec![from, to],
        }
    }

    /// The first cell of the corridor.
    #[inline]
    pub fn source(&self) -> Point {
        self.cells[0]
    }

    /// The last cell of the corridor.
    #[inline]
    pub fn target(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the run is empty. Never true for a well-formed edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Hop count of the corridor.
    #[inline]
    pub fn weight(&self) -> usize {
        self.cells.len() - 1
    }

    /// The full coordinate run.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Whether the corridor starts and ends on the same node.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.source() == self.target()
    }

    /// The same corridor walked in the opposite direction.
    pub fn reversed(&self) -> Edge {
        let mut cells = self.cells.clone();
        cells.reverse();
        Edge { cells }
    }

    /// Concatenate `next` onto this edge. `next` must start where `self`
    /// ends; the shared cell appears once.
    pub fn join(&self, next: &Edge) -> Edge {
        debug_assert_eq!(self.target(), next.source());
        let mut cells = Vec::with_capacity(self.cells.len() + next.cells.len() - 1);
        cells.extend_from_slice(&self.cells);
        cells.extend_from_slice(&next.cells[1..]);
        Edge { cells }
    }

    /// Key that is identical for an edge and its mirror: the coordinate run
    /// oriented from the lower endpoint to the higher one.
    pub(crate) fn canonical_cells(&self) -> Vec<Point> {
        if self.source() <= self.target() {
            self.cells.clone()
        } else {
            self.reversed().cells
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source(), self.target(), self.weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn unit_edge_has_weight_one() {
        let e = Edge::unit(p(0, 0), p(1, 0));
        assert_eq!(e.weight(), 1);
        assert_eq!(e.source(), p(0, 0));
        assert_eq!(e.target(), p(1, 0));
        assert!(!e.is_loop());
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let e = Edge::new(vec![p(0, 0), p(1, 0), p(1, 1)]);
        let r = e.reversed();
        assert_eq!(r.cells(), &[p(1, 1), p(1, 0), p(0, 0)]);
        assert_eq!(r.weight(), e.weight());
        assert_eq!(r.reversed(), e);
    }

    #[test]
    fn join_shares_middle_cell() {
        let a = Edge::new(vec![p(0, 0), p(1, 0)]);
        let b = Edge::new(vec![p(1, 0), p(2, 0), p(2, 1)]);
        let j = a.join(&b);
        assert_eq!(j.cells(), &[p(0, 0), p(1, 0), p(2, 0), p(2, 1)]);
        assert_eq!(j.weight(), a.weight() + b.weight());
    }

    #[test]
    fn canonical_cells_match_mirror() {
        let e = Edge::new(vec![p(3, 3), p(3, 2), p(2, 2)]);
        assert_eq!(e.canonical_cells(), e.reversed().canonical_cells());
    }

    #[test]
    fn loop_detection() {
        let e = Edge::new(vec![p(0, 0), p(1, 0), p(1, 1), p(0, 1), p(0, 0)]);
        assert!(e.is_loop());
    }
}
