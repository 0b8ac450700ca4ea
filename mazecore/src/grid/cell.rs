use crate::dims::Dims;

use self::CellWall::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    pub(crate) visited: bool,
}

impl Cell {
    /// Fully walled, unvisited cell.
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
            visited: false,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        self.set_wall(wall, false);
    }

    pub fn make_wall(&mut self, wall: CellWall) {
        self.set_wall(wall, true);
    }

    fn set_wall(&mut self, wall: CellWall, present: bool) {
        match wall {
            Left => self.left = present,
            Top => self.top = present,
            Right => self.right = present,
            Bottom => self.bottom = present,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn walls(&self) -> Walls {
        Walls {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the four wall flags of a cell, `true` meaning the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Bottom,
    Left,
    Right,
}

impl CellWall {
    /// Up, down, left, right. Both the carver and the solver scan in this order.
    pub const SCAN_ORDER: [CellWall; 4] = [Top, Bottom, Left, Right];

    pub fn to_coord(&self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Bottom => Dims(0, 1),
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Top => Bottom,
            Bottom => Top,
            Left => Right,
            Right => Left,
        }
    }
}
