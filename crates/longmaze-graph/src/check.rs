//! Structural checks for a reduced graph.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use longmaze_core::Point;

use crate::graph::Graph;

/// The first broken invariant found by [`Graph::check_reduced`].
///
/// A correct reducer never produces any of these; the check exists for
/// tests and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralViolation {
    /// A non-terminal node still has exactly two edges.
    Transitional(Point),
    /// A non-terminal node has fewer than two edges.
    DeadEnd(Point),
    /// A node has an edge back to itself.
    SelfLoop(Point),
    /// Two nodes are joined by more than one edge.
    Parallel(Point, Point),
    /// An edge does not start on the node that owns it.
    MisplacedEdge(Point),
    /// Two consecutive corridor cells are not grid neighbours.
    BrokenCorridor { from: Point, to: Point },
    /// An edge has no reversed counterpart at its target.
    Unmirrored { from: Point, to: Point },
    /// Begin and end are both present but not connected.
    Disconnected,
}

impl fmt::Display for StructuralViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transitional(p) => write!(f, "node {p} has degree 2"),
            Self::DeadEnd(p) => write!(f, "node {p} is a dead end"),
            Self::SelfLoop(p) => write!(f, "node {p} has a self-loop"),
            Self::Parallel(a, b) => write!(f, "nodes {a} and {b} share parallel edges"),
            Self::MisplacedEdge(p) => write!(f, "node {p} owns an edge starting elsewhere"),
            Self::BrokenCorridor { from, to } => {
                write!(f, "corridor jumps from {from} to {to}")
            }
            Self::Unmirrored { from, to } => write!(f, "edge {from} -> {to} has no mirror"),
            Self::Disconnected => write!(f, "begin and end are disconnected"),
        }
    }
}

impl std::error::Error for StructuralViolation {}

impl Graph {
    /// Verify the invariants every fully reduced graph satisfies.
    pub fn check_reduced(&self) -> Result<(), StructuralViolation> {
        for node in self.nodes() {
            let edges = self.edges(node);
            if !self.is_terminal(node) {
                match edges.len() {
                    2 => return Err(StructuralViolation::Transitional(node)),
                    0 | 1 => return Err(StructuralViolation::DeadEnd(node)),
                    _ => {}
                }
            }

            let mut targets = HashSet::new();
            for e in edges {
                if e.source() != node {
                    return Err(StructuralViolation::MisplacedEdge(node));
                }
                if e.is_loop() {
                    return Err(StructuralViolation::SelfLoop(node));
                }
                if !targets.insert(e.target()) {
                    return Err(StructuralViolation::Parallel(node, e.target()));
                }
                if let Some(w) = e.cells().windows(2).find(|w| !w[0].is_adjacent_4(w[1])) {
                    return Err(StructuralViolation::BrokenCorridor {
                        from: w[0],
                        to: w[1],
                    });
                }
                if self.edge(e.target(), node).map(|m| m.weight()) != Some(e.weight()) {
                    return Err(StructuralViolation::Unmirrored {
                        from: node,
                        to: e.target(),
                    });
                }
            }
        }

        if self.contains(self.begin) && self.contains(self.end) && !self.connected(self.begin, self.end) {
            return Err(StructuralViolation::Disconnected);
        }
        Ok(())
    }

    /// Whether `to` can be reached from `from` along edges.
    pub fn connected(&self, from: Point, to: Point) -> bool {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            if p == to {
                return true;
            }
            for e in self.edges(p) {
                if seen.insert(e.target()) {
                    queue.push_back(e.target());
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use longmaze_core::Point;

    use super::StructuralViolation;
    use crate::{Edge, Graph};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn link(g: &mut Graph, cells: &[Point]) {
        let e = Edge::new(cells.to_vec());
        g.push_edge(e.reversed());
        g.push_edge(e);
    }

    #[test]
    fn detects_transitional_node() {
        let mut g = Graph::new(p(0, 0), p(2, 0));
        link(&mut g, &[p(0, 0), p(1, 0)]);
        link(&mut g, &[p(1, 0), p(2, 0)]);
        assert_eq!(
            g.check_reduced(),
            Err(StructuralViolation::Transitional(p(1, 0)))
        );
    }

    #[test]
    fn detects_broken_corridor() {
        let mut g = Graph::new(p(0, 0), p(2, 0));
        link(&mut g, &[p(0, 0), p(2, 0)]);
        assert!(matches!(
            g.check_reduced(),
            Err(StructuralViolation::BrokenCorridor { .. })
        ));
    }

    #[test]
    fn detects_unmirrored_edge() {
        let mut g = Graph::new(p(0, 0), p(1, 0));
        g.push_edge(Edge::unit(p(0, 0), p(1, 0)));
        g.push_edge(Edge::unit(p(1, 0), p(1, 1)));
        g.push_edge(Edge::unit(p(1, 1), p(1, 0)));
        assert_eq!(
            g.check_reduced(),
            Err(StructuralViolation::Unmirrored {
                from: p(0, 0),
                to: p(1, 0)
            })
        );
    }

    #[test]
    fn detects_disconnection() {
        let mut g = Graph::new(p(0, 0), p(5, 5));
        g.insert_node(p(0, 0));
        g.insert_node(p(5, 5));
        assert_eq!(g.check_reduced(), Err(StructuralViolation::Disconnected));
    }

    #[test]
    fn accepts_single_corridor() {
        let mut g = Graph::new(p(0, 0), p(0, 2));
        link(&mut g, &[p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(g.check_reduced(), Ok(()));
        assert!(g.connected(p(0, 0), p(0, 2)));
    }
}
