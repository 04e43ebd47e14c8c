use longmaze_core::{Maze, Point};

/// Anything that can be flooded into a plain corridor graph.
pub trait GridSource {
    /// The cell every route starts from.
    fn begin(&self) -> Point;

    /// The cell every route must reach.
    fn end(&self) -> Point;

    /// Append passable neighbours of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl GridSource for Maze {
    fn begin(&self) -> Point {
        Maze::begin(self)
    }

    fn end(&self) -> Point {
        Maze::end(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Maze::neighbors(self, p));
    }
}
