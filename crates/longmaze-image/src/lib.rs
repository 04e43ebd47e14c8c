//! Maze bitmaps in, solution bitmaps out.
//!
//! A maze image is read as 8-bit luma: pixels at or above
//! [`PASSAGE_THRESHOLD`] are passages, darker pixels are walls. Solutions are
//! written as RGB with white passages, black walls and red route cells.

use std::fmt;
use std::path::Path;

use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use longmaze_core::{Maze, MazeError, Point};

/// Lowest luma value read as a passage.
pub const PASSAGE_THRESHOLD: u8 = 128;

const PASSAGE: Rgb<u8> = Rgb([255, 255, 255]);
const WALL: Rgb<u8> = Rgb([0, 0, 0]);
const ROUTE: Rgb<u8> = Rgb([255, 0, 0]);

/// Error type for reading and writing maze images.
#[derive(Debug)]
pub enum ImageError {
    /// The file could not be decoded or encoded.
    Image(image::ImageError),
    /// The decoded grid is not a usable maze.
    Maze(MazeError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Image(e) => write!(f, "image: {e}"),
            ImageError::Maze(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Image(e) => Some(e),
            ImageError::Maze(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for ImageError {
    fn from(e: image::ImageError) -> Self {
        ImageError::Image(e)
    }
}

impl From<MazeError> for ImageError {
    fn from(e: MazeError) -> Self {
        ImageError::Maze(e)
    }
}

/// Read a maze from any image format the `image` crate was built with.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze, ImageError> {
    let img = image::open(path.as_ref())?;
    let maze = maze_from_image(&img)?;
    log::debug!(
        "loaded {}x{} maze from {}",
        maze.width(),
        maze.height(),
        path.as_ref().display()
    );
    Ok(maze)
}

/// Decode a maze from encoded image bytes.
pub fn load_maze_from_memory(bytes: &[u8]) -> Result<Maze, ImageError> {
    let img = image::load_from_memory(bytes)?;
    Ok(maze_from_image(&img)?)
}

/// Threshold an image into a maze.
pub fn maze_from_image(img: &DynamicImage) -> Result<Maze, MazeError> {
    let luma: GrayImage = img.to_luma8();
    let cells = luma.pixels().map(|p| p.0[0] >= PASSAGE_THRESHOLD).collect();
    Maze::new(luma.width() as i32, luma.height() as i32, cells)
}

/// Paint a maze, with `route` cells in red. Cells outside the maze are
/// ignored.
pub fn maze_to_image(maze: &Maze, route: &[Point]) -> RgbImage {
    let (w, h) = (maze.width() as u32, maze.height() as u32);
    let mut img = RgbImage::from_fn(w, h, |x, y| {
        if maze.is_passage(Point::new(x as i32, y as i32)) {
            PASSAGE
        } else {
            WALL
        }
    });
    for &p in route {
        if maze.bounds().contains(p) {
            img.put_pixel(p.x as u32, p.y as u32, ROUTE);
        }
    }
    img
}

/// Write a maze and its route to `path`. The format follows the file
/// extension.
pub fn save_solution(
    maze: &Maze,
    route: &[Point],
    path: impl AsRef<Path>,
) -> Result<(), ImageError> {
    maze_to_image(maze, route).save(path.as_ref())?;
    log::debug!(
        "wrote {} route cells to {}",
        route.len(),
        path.as_ref().display()
    );
    Ok(())
}
