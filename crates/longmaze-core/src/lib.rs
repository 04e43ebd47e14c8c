//! Core types for longmaze: grid coordinates and the binary maze.
//!
//! A [`Maze`] is a rectangle of wall and passage cells. Its begin cell is the
//! first passage of the top row and its end cell the first passage of the
//! bottom row; both are found when the maze is built.

pub mod geom;
pub mod maze;

pub use geom::{Point, Range};
pub use maze::{Maze, MazeError};
