//! Fixed-point reduction of a plain graph to its decision nodes.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

use longmaze_core::Point;

use crate::graph::Graph;

/// Counts of what each rule removed during one [`Graph::reduce`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceStats {
    /// Outer iterations, including the final one that changed nothing.
    pub rounds: usize,
    /// Degree-2 nodes spliced out.
    pub contracted: usize,
    /// Dead-end nodes removed.
    pub dead_ends: usize,
    /// Self-loop edge records removed.
    pub self_loops: usize,
    /// Parallel edge records removed.
    pub parallel: usize,
    /// Jumper motifs collapsed.
    pub jumpers: usize,
}

impl ReduceStats {
    /// Whether any rule fired.
    pub fn changed(&self) -> bool {
        self.contracted + self.dead_ends + self.self_loops + self.parallel + self.jumpers > 0
    }
}

impl fmt::Display for ReduceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rounds: {} contracted, {} dead ends, {} self-loops, {} parallel, {} jumpers",
            self.rounds, self.contracted, self.dead_ends, self.self_loops, self.parallel, self.jumpers
        )
    }
}

impl Graph {
    /// Reduce the graph in place until no rule applies.
    ///
    /// The inner loop runs corridor contraction, dead-end pruning, self-loop
    /// removal and parallel-edge collapse until none of them fires. Jumper
    /// collapse then runs once, and the whole thing repeats while anything
    /// changed. Begin and end always survive.
    pub fn reduce(&mut self) -> ReduceStats {
        let mut stats = ReduceStats::default();

        loop {
            stats.rounds += 1;
            let mut changed = false;

            loop {
                let contracted = self.contract_transitional_nodes();
                let dead_ends = self.prune_dead_ends();
                let self_loops = self.remove_self_loops();
                let parallel = self.collapse_parallel_edges();

                stats.contracted += contracted;
                stats.dead_ends += dead_ends;
                stats.self_loops += self_loops;
                stats.parallel += parallel;

                if contracted + dead_ends + self_loops + parallel == 0 {
                    break;
                }
                changed = true;
                log::trace!(
                    "reduce pass: {contracted} contracted, {dead_ends} dead ends, \
                     {self_loops} self-loops, {parallel} parallel; {} nodes left",
                    self.len()
                );
            }

            let jumpers = self.collapse_jumpers();
            stats.jumpers += jumpers;
            if jumpers > 0 {
                changed = true;
            }

            if !changed {
                break;
            }
        }

        log::debug!("reduced graph to {} nodes ({stats})", self.len());
        stats
    }

    /// Splice out every non-terminal node with exactly two edges.
    fn contract_transitional_nodes(&mut self) -> usize {
        let candidates: Vec<Point> = self
            .nodes()
            .filter(|&p| !self.is_terminal(p) && self.degree(p) == 2)
            .collect();

        candidates
            .into_iter()
            .rev()
            .filter(|&p| self.contract_node(p))
            .count()
    }

    /// Replace `node` and its two corridors with one corridor between its
    /// neighbours. Skips nodes whose degree changed or that carry a loop.
    fn contract_node(&mut self, node: Point) -> bool {
        let edges = self.edges(node);
        if edges.len() != 2 || edges.iter().any(|e| e.is_loop()) {
            return false;
        }
        let spliced = edges[0].reversed().join(&edges[1]);
        let (left, right) = (spliced.source(), spliced.target());

        self.remove_node(node);
        let mirror = spliced.reversed();
        let replaced_left = self.replace_edge_to(left, node, spliced);
        let replaced_right = self.replace_edge_to(right, node, mirror);
        debug_assert!(replaced_left && replaced_right, "unmirrored edge at {node}");
        true
    }

    /// Remove every non-terminal node with at most one edge, along with all
    /// edges that lead to it.
    fn prune_dead_ends(&mut self) -> usize {
        let dead: HashSet<Point> = self
            .nodes()
            .filter(|&p| !self.is_terminal(p) && self.degree(p) <= 1)
            .collect();
        if dead.is_empty() {
            return 0;
        }

        for &p in &dead {
            self.remove_node(p);
        }
        for rec in self.records_mut() {
            rec.edges.retain(|e| !dead.contains(&e.target()));
        }
        dead.len()
    }

    /// Drop every edge that starts and ends on the same node.
    fn remove_self_loops(&mut self) -> usize {
        let mut removed = 0;
        for rec in self.records_mut() {
            let before = rec.edges.len();
            rec.edges.retain(|e| !e.is_loop());
            removed += before - rec.edges.len();
        }
        removed
    }

    /// Keep only the longest edge between any two nodes.
    ///
    /// Equal lengths are decided on the canonically oriented corridor, so a
    /// node and its neighbour keep the two halves of the same mirrored pair.
    fn collapse_parallel_edges(&mut self) -> usize {
        let mut removed = 0;
        for rec in self.records_mut() {
            let mut best: HashMap<Point, usize> = HashMap::new();
            for (i, e) in rec.edges.iter().enumerate() {
                match best.entry(e.target()) {
                    Entry::Vacant(v) => {
                        v.insert(i);
                    }
                    Entry::Occupied(mut o) => {
                        let cur = &rec.edges[*o.get()];
                        let longer = e.len() > cur.len()
                            || (e.len() == cur.len() && e.canonical_cells() < cur.canonical_cells());
                        if longer {
                            o.insert(i);
                        }
                    }
                }
            }
            if best.len() == rec.edges.len() {
                continue;
            }

            let keep: HashSet<usize> = best.into_values().collect();
            let before = rec.edges.len();
            let mut i = 0;
            rec.edges.retain(|_| {
                let k = keep.contains(&i);
                i += 1;
                k
            });
            removed += before - rec.edges.len();
        }
        removed
    }
}
