//! Jumper collapse.
//!
//! A jumper is a four-node motif: two adjacent degree-3 nodes `one` and
//! `two` whose remaining edges both lead to the same pair of outer nodes
//! `a` and `b`.
//!
//! ```text
//!        a
//!       / \
//!    one---two
//!       \ /
//!        b
//! ```
//!
//! Any simple route through the motif enters at one outer node and leaves at
//! the other, so the motif can be replaced by a single `a` to `b` corridor that
//! follows the longest of the four crossings `a-one-b`, `a-two-b`,
//! `a-one-two-b` and `a-two-one-b`.

use longmaze_core::Point;

use crate::edge::Edge;
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Jumper {
    pub(crate) one: Point,
    pub(crate) two: Point,
    pub(crate) a: Point,
    pub(crate) b: Point,
}

impl Graph {
    /// Collapse every jumper found in one scan. Returns how many were
    /// collapsed; motifs broken by an earlier collapse are skipped.
    pub(crate) fn collapse_jumpers(&mut self) -> usize {
        let jumpers = self.find_jumpers();
        jumpers
            .into_iter()
            .filter(|&j| self.collapse_jumper(j))
            .count()
    }

    pub(crate) fn find_jumpers(&self) -> Vec<Jumper> {
        let mut found = Vec::new();
        for one in self.nodes() {
            if !self.is_inner_junction(one) {
                continue;
            }
            for e in self.edges(one) {
                let two = e.target();
                if one < two && self.is_inner_junction(two) {
                    if let Some(j) = self.jumper_at(one, two) {
                        found.push(j);
                    }
                }
            }
        }
        found
    }

    /// A non-terminal node with exactly three edges.
    fn is_inner_junction(&self, p: Point) -> bool {
        !self.is_terminal(p) && self.degree(p) == 3
    }

    /// The motif formed by `one` and `two`, if their neighbourhoods together
    /// span exactly four nodes.
    fn jumper_at(&self, one: Point, two: Point) -> Option<Jumper> {
        let mut near: Vec<Point> = Vec::with_capacity(6);
        for e in self.edges(one).iter().chain(self.edges(two)) {
            let t = e.target();
            if !near.contains(&t) {
                near.push(t);
            }
        }
        if near.len() != 4 || !near.contains(&one) || !near.contains(&two) {
            return None;
        }
        let mut outer = near.into_iter().filter(|&p| p != one && p != two);
        let a = outer.next()?;
        let b = outer.next()?;
        Some(Jumper { one, two, a, b })
    }

    fn collapse_jumper(&mut self, j: Jumper) -> bool {
        let still_valid = self.is_inner_junction(j.one)
            && self.is_inner_junction(j.two)
            && self.jumper_at(j.one, j.two) == Some(j);
        if !still_valid {
            return false;
        }

        let (Some(e12), Some(ea1), Some(ea2), Some(e1b), Some(e2b)) = (
            self.edge(j.one, j.two),
            self.edge(j.a, j.one),
            self.edge(j.a, j.two),
            self.edge(j.one, j.b),
            self.edge(j.two, j.b),
        ) else {
            return false;
        };
        let e21 = e12.reversed();

        let crossings: [&[&Edge]; 4] = [
            &[ea1, e1b],
            &[ea2, e2b],
            &[ea1, e12, e2b],
            &[ea2, &e21, e1b],
        ];

        // First crossing wins ties.
        let mut best: Option<&[&Edge]> = None;
        let mut best_len = 0;
        for route in crossings {
            let len: usize = route.iter().map(|e| e.weight()).sum();
            if len > best_len {
                best_len = len;
                best = Some(route);
            }
        }
        let Some(route) = best else {
            return false;
        };

        let mut corridor = route[0].clone();
        for e in &route[1..] {
            corridor = corridor.join(e);
        }

        for (x, y) in [(j.a, j.one), (j.a, j.two), (j.one, j.b), (j.two, j.b)] {
            self.remove_edge_pair(x, y);
        }
        self.remove_node(j.one);
        self.remove_node(j.two);

        log::trace!(
            "jumper {} / {} collapsed into {} -> {} ({})",
            j.one,
            j.two,
            j.a,
            j.b,
            corridor.weight()
        );
        let mirror = corridor.reversed();
        self.push_edge(corridor);
        self.push_edge(mirror);
        true
    }
}

#[cfg(test)]
mod tests {
    use longmaze_core::Point;

    use crate::{Edge, Graph};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn link(g: &mut Graph, cells: &[Point]) {
        let e = Edge::new(cells.to_vec());
        g.push_edge(e.reversed());
        g.push_edge(e);
    }

    /// Begin (1,0) above `a` (1,1); `one` (0,2) and `two` (2,2) both reach
    /// `b` (1,3), which leads to end (1,4). The corridors below are not grid
    /// accurate; only their lengths matter here.
    fn diamond(long_rung: bool) -> Graph {
        let (a, one, two, b) = (p(1, 1), p(0, 2), p(2, 2), p(1, 3));
        let mut g = Graph::new(p(1, 0), p(1, 4));
        link(&mut g, &[p(1, 0), a]);
        link(&mut g, &[a, p(0, 1), one]);
        link(&mut g, &[a, p(2, 1), two]);
        if long_rung {
            link(&mut g, &[one, p(0, 5), p(1, 5), p(2, 5), p(3, 5), two]);
        } else {
            link(&mut g, &[one, p(1, 2), two]);
        }
        link(&mut g, &[one, p(0, 3), b]);
        link(&mut g, &[two, p(2, 3), b]);
        link(&mut g, &[b, p(1, 4)]);
        g
    }

    #[test]
    fn finds_the_motif_once() {
        let g = diamond(false);
        let found = g.find_jumpers();
        assert_eq!(found.len(), 1);
        let j = found[0];
        assert_eq!((j.one, j.two), (p(0, 2), p(2, 2)));
        assert_eq!((j.a, j.b), (p(1, 1), p(1, 3)));
    }

    #[test]
    fn crossing_through_the_rung_when_longest() {
        let mut g = diamond(false);
        assert_eq!(g.collapse_jumpers(), 1);
        assert!(!g.contains(p(0, 2)));
        assert!(!g.contains(p(2, 2)));
        // a-one-two-b: 2 + 2 + 2 beats a-one-b: 4.
        let e = g.edge(p(1, 1), p(1, 3)).unwrap();
        assert_eq!(e.weight(), 6);
        assert_eq!(e.source(), p(1, 1));
        assert_eq!(e.target(), p(1, 3));
        assert_eq!(g.edge(p(1, 3), p(1, 1)).unwrap(), &e.reversed());
    }

    #[test]
    fn long_rung_is_used() {
        let mut g = diamond(true);
        g.collapse_jumpers();
        assert_eq!(g.edge(p(1, 1), p(1, 3)).unwrap().weight(), 2 + 5 + 2);
    }

    #[test]
    fn full_reduction_leaves_single_corridor() {
        let mut g = diamond(false);
        let stats = g.reduce();
        assert_eq!(stats.jumpers, 1);
        assert_eq!(g.len(), 2);
        assert_eq!(g.edge(p(1, 0), p(1, 4)).unwrap().weight(), 1 + 6 + 1);
        assert!(g.check_reduced().is_ok());
    }

    #[test]
    fn terminal_nodes_are_never_jumper_members() {
        let (a, one, two, b) = (p(1, 1), p(0, 2), p(2, 2), p(1, 3));
        // `one` is the begin node.
        let mut g = Graph::new(one, p(1, 4));
        link(&mut g, &[a, p(0, 1), one]);
        link(&mut g, &[a, p(2, 1), two]);
        link(&mut g, &[one, p(1, 2), two]);
        link(&mut g, &[one, p(0, 3), b]);
        link(&mut g, &[two, p(2, 3), b]);
        link(&mut g, &[b, p(1, 4)]);
        assert!(g.find_jumpers().is_empty());
    }
}
