//! A binary maze grid.
//!
//! [`Maze`] stores one boolean per cell (`true` = passage, `false` = wall)
//! in row-major order, together with the begin and end cells:
//!
//! - **begin** is the first passage in row 0, scanning by increasing column;
//! - **end** is the first passage in the last row, scanning the same way.
//!
//! Mazes without either cell are rejected with a [`MazeError`].

use std::fmt;

use crate::geom::{Point, Range};

/// A rectangular grid of wall and passage cells with fixed endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    cells: Vec<bool>,
    bounds: Range,
    begin: Point,
    end: Point,
}

impl Maze {
    /// Create a maze from row-major cells.
    ///
    /// `cells.len()` must equal `width * height`.
    pub fn new(width: i32, height: i32, cells: Vec<bool>) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::Empty);
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(MazeError::SizeMismatch {
                expected,
                found: cells.len(),
            });
        }
        let bounds = Range::new(0, 0, width, height);
        let begin = first_passage(&cells, bounds, 0).ok_or(MazeError::NoBegin)?;
        let end = first_passage(&cells, bounds, height - 1).ok_or(MazeError::NoEnd)?;
        Ok(Self {
            cells,
            bounds,
            begin,
            end,
        })
    }

    /// Create a maze from a slice of rows, each row a slice of cells.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.as_ref().len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(MazeError::RaggedRows {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Self::new(width as i32, rows.len() as i32, cells)
    }

    /// Parse an ASCII-art maze: `#` is a wall, any other character a passage.
    ///
    /// Blank lines are ignored so that raw string literals can start on a
    /// fresh line.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let rows: Vec<Vec<bool>> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().map(|ch| ch != '#').collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// The grid rectangle, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width and height in cells, as a point.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The begin cell (first passage of the first row).
    #[inline]
    pub fn begin(&self) -> Point {
        self.begin
    }

    /// The end cell (first passage of the last row).
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is inside the grid and a passage.
    #[inline]
    pub fn is_passage(&self, p: Point) -> bool {
        self.bounds.contains(p) && self.cells[index(self.bounds, p)]
    }

    /// Passable cardinal neighbours of `p`, in the order right, down, left, up.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_passage(n))
    }

    /// Number of passage cells in the whole grid.
    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Maze {
    /// Renders the maze as ASCII art: `#` for walls, `.` for passages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let ch = if self.is_passage(Point::new(x, y)) { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn index(bounds: Range, p: Point) -> usize {
    (p.y as usize) * (bounds.width() as usize) + p.x as usize
}

fn first_passage(cells: &[bool], bounds: Range, y: i32) -> Option<Point> {
    bounds.row(y).find(|&p| cells[index(bounds, p)])
}

/// Errors that can occur when building a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no cells.
    Empty,
    /// The cell buffer does not match the declared dimensions.
    SizeMismatch { expected: usize, found: usize },
    /// A row is wider or narrower than the first one.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The first row has no passage.
    NoBegin,
    /// The last row has no passage.
    NoEnd,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty grid"),
            Self::SizeMismatch { expected, found } => {
                write!(f, "maze: expected {expected} cells, found {found}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::NoBegin => write!(f, "maze: no passage in the first row"),
            Self::NoEnd => write!(f, "maze: no passage in the last row"),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "
#.###
#...#
###.#
#...#
#.###";

    #[test]
    fn parse_finds_endpoints() {
        let m = Maze::parse(SMALL).unwrap();
        assert_eq!(m.size(), Point::new(5, 5));
        assert_eq!(m.begin(), Point::new(1, 0));
        assert_eq!(m.end(), Point::new(1, 4));
        assert_eq!(m.passage_count(), 9);
    }

    #[test]
    fn begin_is_leftmost_passage() {
        let m = Maze::parse("#..\n...\n.#.").unwrap();
        assert_eq!(m.begin(), Point::new(1, 0));
        assert_eq!(m.end(), Point::new(0, 2));
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let m = Maze::parse(SMALL).unwrap();
        let n: Vec<_> = m.neighbors(Point::new(1, 0)).collect();
        assert_eq!(n, vec![Point::new(1, 1)]);
        let n: Vec<_> = m.neighbors(Point::new(2, 1)).collect();
        assert_eq!(n, vec![Point::new(3, 1), Point::new(1, 1)]);
        assert!(!m.is_passage(Point::new(-1, 0)));
        assert!(!m.is_passage(Point::new(5, 0)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let m = Maze::parse(SMALL).unwrap();
        let again = Maze::parse(&m.to_string()).unwrap();
        assert_eq!(m, again);
    }

    #[test]
    fn missing_begin() {
        assert_eq!(Maze::parse("###\n...").unwrap_err(), MazeError::NoBegin);
    }

    #[test]
    fn missing_end() {
        assert_eq!(Maze::parse("...\n###").unwrap_err(), MazeError::NoEnd);
    }

    #[test]
    fn ragged_rows() {
        let err = Maze::parse("..\n...").unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRows {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn empty_and_size_mismatch() {
        assert_eq!(Maze::parse("").unwrap_err(), MazeError::Empty);
        assert_eq!(
            Maze::new(2, 2, vec![true; 3]).unwrap_err(),
            MazeError::SizeMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn single_row_maze_shares_begin_and_end() {
        let m = Maze::parse("#.#").unwrap();
        assert_eq!(m.begin(), m.end());
    }
}
