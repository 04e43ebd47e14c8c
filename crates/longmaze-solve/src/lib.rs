//! Heuristic longest-path solvers over a reduced corridor graph.
//!
//! Finding the longest simple route between two nodes is NP-hard, so the
//! solvers here trade optimality for bounded work:
//!
//! - [`BeamSearchSolver`] grows simple paths one hop per generation and keeps
//!   only the longest `max_size` partial paths.
//! - [`AntColonySolver`] sends ants on pheromone-biased random walks and
//!   reinforces the corridors used by walks that reach the end.
//!
//! Both implement [`Solver`] and report a [`Solution`] or
//! [`SolveError::NoSolutionFound`] when their budget runs out first.

pub mod ant;
pub mod beam;
pub mod pheromone;
pub mod solver;
pub mod sweep;

pub use ant::{AntColonySolver, AntConfig};
pub use beam::{BeamConfig, BeamSearchSolver};
pub use pheromone::PheromoneMap;
pub use solver::{Solution, SolveError, Solver};
pub use sweep::{
    ANT_COUNT_LADDER, SweepOutcome, beam_width_ladder, sweep_ant_count, sweep_beam_width,
};
