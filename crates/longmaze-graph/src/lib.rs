//! Corridor-graph compression for binary mazes.
//!
//! This crate turns a maze grid into a small weighted graph whose nodes are
//! only the cells where a route can actually branch:
//!
//! - **Plain graph** construction by breadth-first flood from the begin cell
//!   ([`Graph::build`]): one node per reachable passage, one unit edge per
//!   passable neighbour.
//! - **Reduction** to a fixed point ([`Graph::reduce`]): corridor contraction,
//!   dead-end pruning, self-loop removal, parallel-edge collapse and jumper
//!   collapse.
//! - **Path queries** over decision nodes ([`Graph::path_length`],
//!   [`Graph::full_path`]).
//!
//! Every [`Edge`] keeps the full coordinate run of the corridor it stands
//! for, so a route through the reduced graph can always be expanded back to
//! grid cells.
//!
//! # Example
//!
//! ```
//! use longmaze_core::Maze;
//! use longmaze_graph::Graph;
//!
//! let maze = Maze::parse("#.#\n#.#\n#.#").unwrap();
//! let mut graph = Graph::build(&maze);
//! graph.reduce();
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.edge(maze.begin(), maze.end()).unwrap().weight(), 2);
//! ```

mod build;
mod check;
mod edge;
mod error;
mod graph;
mod jumper;
mod path;
mod reduce;
mod traits;

pub use check::StructuralViolation;
pub use edge::Edge;
pub use error::GraphError;
pub use graph::Graph;
pub use reduce::ReduceStats;
pub use traits::GridSource;
