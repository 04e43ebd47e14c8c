use std::collections::HashMap;
use std::fmt;

use longmaze_core::Point;

use crate::edge::Edge;

// ---------------------------------------------------------------------------
// Node arena
// ---------------------------------------------------------------------------

pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    pub(crate) pos: Point,
    pub(crate) edges: Vec<Edge>,
}

/// Weighted corridor graph over maze cells.
///
/// Nodes live in an arena of records that is tombstoned on removal, so node
/// ids stay stable while the reducer rewrites the graph in place. Iteration
/// follows arena (insertion) order, which keeps every pass deterministic.
///
/// Each node holds its outgoing edges in an ordered list. Edges come in
/// mirrored pairs: whenever `a` has an edge to `b`, `b` has the reversed
/// corridor back to `a`.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Option<NodeRecord>>,
    pub(crate) index: HashMap<Point, NodeId>,
    pub(crate) begin: Point,
    pub(crate) end: Point,
}

impl Graph {
    /// Create a graph with no nodes and the given endpoints.
    pub fn new(begin: Point, end: Point) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            begin,
            end,
        }
    }

    /// The begin node.
    #[inline]
    pub fn begin(&self) -> Point {
        self.begin
    }

    /// The end node.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is one of the two endpoints, which reduction never removes.
    #[inline]
    pub fn is_terminal(&self, p: Point) -> bool {
        p == self.begin || p == self.end
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the graph has no live nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether `p` is a live node.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// Live nodes in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().flatten().map(|rec| rec.pos)
    }

    /// Outgoing edges of `p`. Unknown nodes have no edges.
    pub fn edges(&self, p: Point) -> &[Edge] {
        match self.record(p) {
            Some(rec) => &rec.edges,
            None => &[],
        }
    }

    /// Number of outgoing edges of `p`.
    #[inline]
    pub fn degree(&self, p: Point) -> usize {
        self.edges(p).len()
    }

    /// The first edge from `from` to `to`, if any.
    pub fn edge(&self, from: Point, to: Point) -> Option<&Edge> {
        self.edges(from).iter().find(|e| e.target() == to)
    }

    /// Total number of directed edge records.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().flatten().map(|rec| rec.edges.len()).sum()
    }

    /// Sum of the weights of all corridors, each mirrored pair counted once.
    pub fn total_weight(&self) -> usize {
        self.nodes
            .iter()
            .flatten()
            .flat_map(|rec| rec.edges.iter())
            .map(Edge::weight)
            .sum::<usize>()
            / 2
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Make `p` a node if it is not one already and return its id.
    pub(crate) fn insert_node(&mut self, p: Point) -> NodeId {
        if let Some(&id) = self.index.get(&p) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Some(NodeRecord {
            pos: p,
            edges: Vec::new(),
        }));
        self.index.insert(p, id);
        id
    }

    /// Append `edge` to the list of its source node, creating the node if
    /// needed.
    pub fn push_edge(&mut self, edge: Edge) {
        let id = self.insert_node(edge.source());
        if let Some(rec) = self.nodes[id].as_mut() {
            rec.edges.push(edge);
        }
    }

    /// Remove node `p` and return its edge list. Edges elsewhere that point
    /// at `p` are left untouched.
    pub(crate) fn remove_node(&mut self, p: Point) -> Option<Vec<Edge>> {
        let id = self.index.remove(&p)?;
        self.nodes[id].take().map(|rec| rec.edges)
    }

    /// Replace the first edge of `at` that ends on `old_target` with
    /// `edge`. Returns whether a replacement happened.
    pub(crate) fn replace_edge_to(&mut self, at: Point, old_target: Point, edge: Edge) -> bool {
        let Some(rec) = self.record_mut(at) else {
            return false;
        };
        match rec.edges.iter().position(|e| e.target() == old_target) {
            Some(i) => {
                rec.edges[i] = edge;
                true
            }
            None => false,
        }
    }

    /// Remove the first edge of `at` that ends on `target`.
    pub(crate) fn remove_edge_to(&mut self, at: Point, target: Point) -> Option<Edge> {
        let rec = self.record_mut(at)?;
        let i = rec.edges.iter().position(|e| e.target() == target)?;
        Some(rec.edges.remove(i))
    }

    /// Remove one edge `a -> b` and one edge `b -> a`.
    pub(crate) fn remove_edge_pair(&mut self, a: Point, b: Point) {
        self.remove_edge_to(a, b);
        self.remove_edge_to(b, a);
    }

    /// Mutable access to every live node record, in arena order.
    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut NodeRecord> {
        self.nodes.iter_mut().flatten()
    }

    #[inline]
    pub(crate) fn record(&self, p: Point) -> Option<&NodeRecord> {
        let id = *self.index.get(&p)?;
        self.nodes[id].as_ref()
    }

    #[inline]
    pub(crate) fn record_mut(&mut self, p: Point) -> Option<&mut NodeRecord> {
        let id = *self.index.get(&p)?;
        self.nodes[id].as_mut()
    }
}

impl fmt::Display for Graph {
    /// One block per node: the node, then its edges indented below it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rec in self.nodes.iter().flatten() {
            writeln!(f, "{}", rec.pos)?;
            for e in &rec.edges {
                writeln!(f, "   {e}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn chain() -> Graph {
        let mut g = Graph::new(p(0, 0), p(2, 0));
        for (a, b) in [(p(0, 0), p(1, 0)), (p(1, 0), p(2, 0))] {
            g.push_edge(Edge::unit(a, b));
            g.push_edge(Edge::unit(b, a));
        }
        g
    }

    #[test]
    fn push_edge_creates_nodes_in_order() {
        let g = chain();
        assert_eq!(g.len(), 3);
        let order: Vec<_> = g.nodes().collect();
        assert_eq!(order, vec![p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(g.degree(p(1, 0)), 2);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.total_weight(), 2);
    }

    #[test]
    fn unknown_node_has_no_edges() {
        let g = chain();
        assert!(g.edges(p(9, 9)).is_empty());
        assert_eq!(g.degree(p(9, 9)), 0);
        assert!(g.edge(p(0, 0), p(2, 0)).is_none());
    }

    #[test]
    fn remove_node_tombstones() {
        let mut g = chain();
        let edges = g.remove_node(p(1, 0)).unwrap();
        assert_eq!(edges.len(), 2);
        assert!(!g.contains(p(1, 0)));
        assert_eq!(g.len(), 2);
        assert_eq!(g.nodes().count(), 2);
        // Dangling edges are the caller's business.
        assert!(g.edge(p(0, 0), p(1, 0)).is_some());
        assert!(g.remove_node(p(1, 0)).is_none());
    }

    #[test]
    fn replace_and_remove_edges() {
        let mut g = chain();
        let long = Edge::new(vec![p(0, 0), p(1, 0), p(2, 0)]);
        assert!(g.replace_edge_to(p(0, 0), p(1, 0), long.clone()));
        assert_eq!(g.edge(p(0, 0), p(2, 0)), Some(&long));
        assert!(!g.replace_edge_to(p(0, 0), p(1, 0), long));
        g.remove_edge_pair(p(1, 0), p(2, 0));
        assert_eq!(g.degree(p(1, 0)), 1);
        assert_eq!(g.degree(p(2, 0)), 0);
    }

    #[test]
    fn terminal_nodes() {
        let g = chain();
        assert!(g.is_terminal(p(0, 0)));
        assert!(g.is_terminal(p(2, 0)));
        assert!(!g.is_terminal(p(1, 0)));
    }
}
