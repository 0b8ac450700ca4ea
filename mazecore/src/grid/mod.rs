pub mod cell;
#[allow(clippy::module_inception)]
pub mod grid;

pub use cell::{Cell, CellWall, Walls};
pub use grid::Grid;

use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {cols}x{rows}, both must be at least 1")]
    InvalidDimension { cols: i32, rows: i32 },
    #[error("cells {from} and {to} are not orthogonal neighbors")]
    InvalidAdjacency { from: Dims, to: Dims },
    #[error("position {0} is outside of the grid")]
    OutOfBounds(Dims),
}
