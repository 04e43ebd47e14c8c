use std::collections::HashSet;

use longmaze_core::Point;

use crate::edge::Edge;
use crate::graph::Graph;
use crate::traits::GridSource;

impl Graph {
    /// Flood `source` breadth-first from its begin cell into a plain graph.
    ///
    /// Every passage reachable from begin becomes a node with one unit edge
    /// per passable neighbour. A cell is expanded only the first time it is
    /// dequeued; neighbours are queued regardless, and the mirrored edge
    /// appears once the neighbour is expanded in turn. Unreachable cells
    /// never become nodes.
    pub fn build<S: GridSource>(source: &S) -> Self {
        let begin = source.begin();
        let mut graph = Graph::new(begin, source.end());

        let mut frontier = vec![begin];
        let mut seen: HashSet<Point> = HashSet::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while !frontier.is_empty() {
            let mut next = Vec::new();

            for &cp in &frontier {
                if !seen.insert(cp) {
                    continue;
                }
                graph.insert_node(cp);

                nbuf.clear();
                source.neighbors(cp, &mut nbuf);
                for &np in &nbuf {
                    graph.push_edge(Edge::unit(cp, np));
                    next.push(np);
                }
            }

            frontier = next;
        }

        log::debug!(
            "plain graph: {} nodes, {} edges",
            graph.len(),
            graph.edge_count()
        );
        graph
    }

    /// Build the plain graph for `source` and reduce it to a fixed point.
    pub fn build_reduced<S: GridSource>(source: &S) -> Self {
        let mut graph = Self::build(source);
        graph.reduce();
        graph
    }
}
