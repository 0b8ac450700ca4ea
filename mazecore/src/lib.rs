//! Perfect maze carving and solving.
//!
//! A [`Maze`] is a [`Grid`] carved by a randomized depth-first backtracker into a
//! spanning tree, so there is exactly one path between any two cells. The entrance is
//! the top wall of `(0, 0)`, the exit the bottom wall of the bottom-right cell.
//!
//! ```
//! use mazecore::Maze;
//!
//! let mut maze = Maze::new(8, 5, Some(42)).unwrap();
//! assert!(maze.grid().is_perfect());
//! assert!(maze.solve());
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod grid;
pub mod maze;
pub mod renderer;

pub use dims::Dims;
pub use grid::{Cell, CellWall, Grid, GridError, Walls};
pub use maze::Maze;
pub use renderer::{NoopRenderer, Renderer};
