//! Ant colony search for long simple paths.
//!
//! Ants walk the reduced graph one corridor at a time, picking the next node
//! with a weight of `(FLOOR + pheromone)^BIAS`. A walk that steps back onto a
//! node it already holds drops the loop it just closed, so the route an ant
//! carries is always simple. Ants that reach the end node first let every
//! trail evaporate a little, then lay `reward(length)` along their own route.
//!
//! The small `BIAS` keeps the choice close to uniform: pheromone only tilts
//! the walk, it never locks it onto one route.

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use longmaze_core::Point;
use longmaze_graph::Graph;

use crate::pheromone::PheromoneMap;
use crate::solver::{Solution, SolveError, Solver};

/// Fraction of every trail that evaporates after a successful ant.
pub const DECAY: f64 = 0.1;
/// Exponent applied to the trail weight when choosing the next node.
pub const BIAS: f64 = 0.2;
/// Base weight every candidate gets regardless of pheromone.
pub const FLOOR: f64 = 1.0;
/// Exponent of the deposit reward.
pub const REWARD_EXPONENT: f64 = 0.7;

/// Pheromone laid on each step of a successful route of `length` hops.
#[inline]
pub fn reward(length: usize) -> f64 {
    (length as f64).powf(REWARD_EXPONENT)
}

/// Parameters for [`AntColonySolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntConfig {
    /// Step limit per ant.
    pub ant_steps: usize,
    /// Number of ants per run.
    pub ants_count: usize,
    /// Seed for the default generator.
    pub seed: u64,
}

impl Default for AntConfig {
    fn default() -> Self {
        Self {
            ant_steps: 1_000_000,
            ants_count: 1000,
            seed: 0,
        }
    }
}

/// Pheromone-guided random search over a reduced graph.
///
/// The solver owns its generator, so two solvers built from the same seed
/// produce the same run on the same graph.
#[derive(Debug, Clone)]
pub struct AntColonySolver<R: Rng = StdRng> {
    config: AntConfig,
    rng: R,
    pheromones: PheromoneMap,
}

impl AntColonySolver<StdRng> {
    /// Create a solver seeded with `seed`. Zero counts are raised to 1.
    pub fn new(ant_steps: usize, ants_count: usize, seed: u64) -> Self {
        Self::with_config(AntConfig {
            ant_steps,
            ants_count,
            seed,
        })
    }

    /// Create a solver from a config. Zero counts are raised to 1.
    pub fn with_config(config: AntConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for AntColonySolver<StdRng> {
    fn default() -> Self {
        Self::with_config(AntConfig::default())
    }
}

impl<R: Rng> AntColonySolver<R> {
    /// Create a solver drawing from `rng`. The config seed is kept only for
    /// reporting.
    pub fn with_rng(config: AntConfig, rng: R) -> Self {
        Self {
            config: AntConfig {
                ant_steps: config.ant_steps.max(1),
                ants_count: config.ants_count.max(1),
                seed: config.seed,
            },
            rng,
            pheromones: PheromoneMap::new(),
        }
    }

    /// The active parameters.
    pub fn config(&self) -> AntConfig {
        self.config
    }

    /// Trails left by the last run.
    pub fn pheromones(&self) -> &PheromoneMap {
        &self.pheromones
    }

    /// Release every ant and return the longest route any of them completed.
    pub fn search(&mut self, graph: &Graph) -> Result<Solution, SolveError> {
        let (begin, end) = (graph.begin(), graph.end());
        self.pheromones.clear();
        if begin == end {
            return Ok(Solution::single(begin));
        }

        let mut best: Option<(Vec<Point>, usize)> = None;
        let mut arrivals = 0;

        for ant in 0..self.config.ants_count {
            let Some(route) = self.walk(graph) else {
                log::trace!("ant {}: lost", ant + 1);
                continue;
            };
            arrivals += 1;
            let length = graph.path_length(&route)?;
            self.evolve(&route, length);
            log::trace!("ant {}: arrived, length {length}", ant + 1);

            if best.as_ref().is_none_or(|(_, l)| length > *l) {
                best = Some((route, length));
            }
        }

        log::debug!(
            "ant colony: {arrivals}/{} ants arrived, best length {}",
            self.config.ants_count,
            best.as_ref().map_or(0, |(_, l)| *l)
        );

        match best {
            Some((route, _)) => Solution::from_nodes(graph, route),
            None => Err(SolveError::NoSolutionFound {
                solver: self.name(),
            }),
        }
    }

    /// Walk one ant. Returns its route when it reaches the end in time.
    fn walk(&mut self, graph: &Graph) -> Option<Vec<Point>> {
        let end = graph.end();
        let mut route = vec![graph.begin()];
        let mut current = graph.begin();

        for _ in 0..self.config.ant_steps {
            let next = self.choose(graph, current)?;
            match route.iter().position(|&p| p == next) {
                Some(i) => route.truncate(i + 1),
                None => route.push(next),
            }
            current = next;
            if current == end {
                return Some(route);
            }
        }
        None
    }

    /// Pick the node after `current`, or `None` when it has no edges.
    fn choose(&mut self, graph: &Graph, current: Point) -> Option<Point> {
        let edges = graph.edges(current);
        match edges {
            [] => return None,
            [only] => return Some(only.target()),
            _ => {}
        }

        let weights: Vec<f64> = edges
            .iter()
            .map(|e| (FLOOR + self.pheromones.get(current, e.target())).powf(BIAS))
            .collect();
        let total: f64 = weights.iter().sum();
        let draw = total * self.rng.random::<f64>();

        let mut acc = 0.0;
        for (e, w) in edges.iter().zip(&weights) {
            acc += w;
            if acc >= draw {
                return Some(e.target());
            }
        }
        // Rounding can leave `acc` a hair below `draw`.
        edges.last().map(|e| e.target())
    }

    /// Evaporate every trail, then reinforce `route`.
    fn evolve(&mut self, route: &[Point], length: usize) {
        self.pheromones.scale(1.0 - DECAY);
        let amount = reward(length);
        for w in route.windows(2) {
            self.pheromones.deposit(w[0], w[1], amount);
        }
    }
}

impl<R: Rng> Solver for AntColonySolver<R> {
    fn name(&self) -> &'static str {
        "ant colony"
    }

    fn solve(&mut self, graph: &Graph) -> Result<Solution, SolveError> {
        self.search(graph)
    }
}

#[cfg(test)]
mod tests {
    use longmaze_core::Maze;

    use super::*;

    const LOOPS: &str = "
#.#####
#.....#
#.#.#.#
#.....#
#.#.#.#
#.....#
#####.#";

    fn graph(src: &str) -> Graph {
        Graph::build_reduced(&Maze::parse(src).unwrap())
    }

    #[test]
    fn reward_curve() {
        assert_eq!(reward(1), 1.0);
        assert!((reward(10) - 10f64.powf(0.7)).abs() < 1e-12);
        assert!(reward(20) > reward(10));
    }

    #[test]
    fn same_seed_same_run() {
        let g = graph(LOOPS);
        let mut a = AntColonySolver::new(10_000, 20, 7);
        let mut b = AntColonySolver::new(10_000, 20, 7);
        assert_eq!(a.search(&g).unwrap(), b.search(&g).unwrap());
        assert_eq!(a.pheromones(), b.pheromones());
    }

    #[test]
    fn one_ant_is_deterministic() {
        let g = graph(LOOPS);
        let first = AntColonySolver::new(10_000, 1, 0).search(&g).unwrap();
        let again = AntColonySolver::new(10_000, 1, 0).search(&g).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn routes_are_simple_and_complete() {
        let g = graph(LOOPS);
        let mut solver = AntColonySolver::new(10_000, 50, 3);
        let s = solver.search(&g).unwrap();
        assert_eq!(s.nodes.first(), Some(&g.begin()));
        assert_eq!(s.nodes.last(), Some(&g.end()));
        let mut seen = s.cells.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), s.cells.len());
        assert_eq!(s.length + 1, s.cells.len());
    }

    #[test]
    fn pheromones_follow_arrivals() {
        let g = graph(LOOPS);
        let mut solver = AntColonySolver::new(10_000, 5, 11);
        let s = solver.search(&g).unwrap();
        for w in s.nodes.windows(2) {
            assert!(solver.pheromones().get(w[0], w[1]) > 0.0);
        }
        // Nothing is ever laid against the direction of a route into begin.
        for ((_, to), _) in solver.pheromones().iter() {
            assert_ne!(to, g.begin());
        }
    }

    #[test]
    fn single_corridor_needs_no_draws() {
        let g = graph("#.#\n#.#\n#.#\n#.#");
        let mut solver = AntColonySolver::new(1, 3, 0);
        let s = solver.search(&g).unwrap();
        assert_eq!(s.length, 3);
        // Three arrivals of length 3: ((r * 0.9) + r) * 0.9 + r.
        let r = reward(3);
        let expected = (r * 0.9 + r) * 0.9 + r;
        let got = solver.pheromones().get(g.begin(), g.end());
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn step_budget_exhausted() {
        let g = graph(LOOPS);
        let err = AntColonySolver::new(1, 5, 0).search(&g).unwrap_err();
        assert_eq!(
            err,
            SolveError::NoSolutionFound {
                solver: "ant colony"
            }
        );
    }

    #[test]
    fn unreachable_end() {
        let g = graph("#.#\n###\n#.#");
        assert!(AntColonySolver::new(100, 10, 0).search(&g).is_err());
    }

    #[test]
    fn run_resets_trails() {
        let g = graph(LOOPS);
        let mut solver = AntColonySolver::new(10_000, 3, 1);
        solver.search(&g).unwrap();
        assert!(!solver.pheromones().is_empty());
        let trivial = graph("#.#");
        solver.search(&trivial).unwrap();
        assert!(solver.pheromones().is_empty());
    }

    #[test]
    fn custom_rng() {
        let g = graph(LOOPS);
        let rng = StdRng::seed_from_u64(5);
        let mut solver = AntColonySolver::with_rng(AntConfig::default(), rng);
        assert_eq!(solver.name(), "ant colony");
        assert!(solver.solve(&g).is_ok());
    }
}
