//! Bounded-width beam search for long simple paths.
//!
//! Each generation extends every partial path by one edge to a node it has
//! not visited yet. When the new frontier holds more than `max_size` paths,
//! only the `max_size` longest survive (stable sort, so equal lengths keep
//! their enumeration order). Every extension that lands on the end node is
//! a candidate answer.

use longmaze_core::Point;
use longmaze_graph::Graph;

use crate::solver::{Solution, SolveError, Solver};

/// Parameters for [`BeamSearchSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeamConfig {
    /// Beam width: partial paths kept per generation.
    pub max_size: usize,
    /// Generation limit.
    pub max_count: usize,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            max_size: 200,
            max_count: 1000,
        }
    }
}

#[derive(Debug, Clone)]
struct Partial {
    nodes: Vec<Point>,
    length: usize,
}

/// Beam search over a reduced graph.
#[derive(Debug, Clone)]
pub struct BeamSearchSolver {
    config: BeamConfig,
}

impl BeamSearchSolver {
    /// Create a solver with the given beam width and generation limit.
    /// Zero values are raised to 1.
    pub fn new(max_size: usize, max_count: usize) -> Self {
        Self::with_config(BeamConfig {
            max_size,
            max_count,
        })
    }

    /// Create a solver from a config. Zero values are raised to 1.
    pub fn with_config(config: BeamConfig) -> Self {
        Self {
            config: BeamConfig {
                max_size: config.max_size.max(1),
                max_count: config.max_count.max(1),
            },
        }
    }

    /// The active parameters.
    pub fn config(&self) -> BeamConfig {
        self.config
    }

    /// Run the search and return the longest complete path found.
    pub fn search(&self, graph: &Graph) -> Result<Solution, SolveError> {
        let (begin, end) = (graph.begin(), graph.end());
        if begin == end {
            return Ok(Solution::single(begin));
        }

        let mut frontier = vec![Partial {
            nodes: vec![begin],
            length: 0,
        }];
        let mut best: Option<Partial> = None;
        let mut generations = 0;

        while generations < self.config.max_count && !frontier.is_empty() {
            generations += 1;
            let mut next: Vec<Partial> = Vec::new();

            for partial in &frontier {
                let Some(&last) = partial.nodes.last() else {
                    continue;
                };
                for e in graph.edges(last) {
                    let t = e.target();
                    if partial.nodes.contains(&t) {
                        continue;
                    }
                    let mut nodes = Vec::with_capacity(partial.nodes.len() + 1);
                    nodes.extend_from_slice(&partial.nodes);
                    nodes.push(t);
                    let grown = Partial {
                        nodes,
                        length: partial.length + e.weight(),
                    };

                    if t == end && best.as_ref().is_none_or(|b| grown.length > b.length) {
                        log::trace!("generation {generations}: new best length {}", grown.length);
                        best = Some(grown.clone());
                    }
                    next.push(grown);
                }
            }

            if next.len() > self.config.max_size {
                next.sort_by(|a, b| b.length.cmp(&a.length));
                next.truncate(self.config.max_size);
            }
            frontier = next;
        }

        log::debug!(
            "beam search: {generations} generations, best length {}",
            best.as_ref().map_or(0, |b| b.length)
        );

        match best {
            Some(b) => Solution::from_nodes(graph, b.nodes),
            None => Err(SolveError::NoSolutionFound {
                solver: self.name(),
            }),
        }
    }
}

impl Default for BeamSearchSolver {
    fn default() -> Self {
        Self::with_config(BeamConfig::default())
    }
}

impl Solver for BeamSearchSolver {
    fn name(&self) -> &'static str {
        "beam search"
    }

    fn solve(&mut self, graph: &Graph) -> Result<Solution, SolveError> {
        self.search(graph)
    }
}
