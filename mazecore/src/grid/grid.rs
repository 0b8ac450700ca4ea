use std::collections::VecDeque;

use hashbrown::HashSet;
use smallvec::SmallVec;

use super::{Cell, CellWall, GridError, Walls};
use crate::{array::Array2D, dims::Dims};

use CellWall::*;

/// Rectangular maze board.
///
/// Every wall is stored twice, once on each of the two cells sharing it. All wall
/// edits go through [`Grid::remove_wall`] and [`Grid::build_wall`], which always
/// update both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Result<Grid, GridError> {
        if cols < 1 || rows < 1 {
            return Err(GridError::InvalidDimension { cols, rows });
        }

        Ok(Grid {
            cells: Array2D::new(Cell::new(), cols as usize, rows as usize),
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(w, h) = self.size();
        0 <= pos.0 && pos.0 < w && 0 <= pos.1 && pos.1 < h
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn walls(&self, pos: Dims) -> Option<Walls> {
        self.get_cell(pos).map(Cell::walls)
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Position next to `pos` in the direction of `wall`, if it is inside the grid.
    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        if !self.is_in_bounds(pos) {
            return None;
        }

        let Dims(dx, dy) = wall.to_coord();
        let next = Dims(pos.0.checked_add(dx)?, pos.1.checked_add(dy)?);
        self.is_in_bounds(next).then_some(next)
    }

    /// In-bounds neighbors in [`CellWall::SCAN_ORDER`].
    pub fn get_neighbors_pos(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::SCAN_ORDER
            .into_iter()
            .filter_map(|wall| self.neighbor(pos, wall))
            .collect()
    }

    /// Returns the wall of `cell` that faces `cell2`.
    ///
    /// Returns `None` if the cells are not orthogonally adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        let dx = cell.0.checked_sub(cell2.0)?;
        let dy = cell.1.checked_sub(cell2.1)?;
        match (dx, dy) {
            (-1, 0) => Some(Right),
            (1, 0) => Some(Left),
            (0, -1) => Some(Bottom),
            (0, 1) => Some(Top),
            _ => None,
        }
    }

    fn shared_wall(&self, from: Dims, to: Dims) -> Result<CellWall, GridError> {
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            return Err(GridError::InvalidAdjacency { from, to });
        }

        Self::which_wall_between(from, to).ok_or(GridError::InvalidAdjacency { from, to })
    }

    /// Carves a passage between two neighboring cells.
    pub fn remove_wall(&mut self, from: Dims, to: Dims) -> Result<(), GridError> {
        let wall = self.shared_wall(from, to)?;
        self.cells[from].remove_wall(wall);
        self.cells[to].remove_wall(wall.reverse_wall());
        Ok(())
    }

    /// Closes the passage between two neighboring cells again.
    pub fn build_wall(&mut self, from: Dims, to: Dims) -> Result<(), GridError> {
        let wall = self.shared_wall(from, to)?;
        self.cells[from].make_wall(wall);
        self.cells[to].make_wall(wall.reverse_wall());
        Ok(())
    }

    /// Opens the boundary walls: top of the entrance and bottom of the exit.
    pub fn open_entrance_and_exit(&mut self) {
        let (entrance, exit) = (self.entrance(), self.exit());
        self.cells[entrance].remove_wall(Top);
        self.cells[exit].remove_wall(Bottom);
    }

    /// Whether one can step from `pos` in the direction of `wall`.
    ///
    /// Only the flag of `pos` is read, the neighbor's matching flag is the same.
    pub fn is_passable(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        let next = self.neighbor(pos, wall)?;
        self.cells[pos].is_open(wall).then_some(next)
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }

    pub fn any_visited(&self) -> bool {
        self.cells.iter().any(Cell::visited)
    }

    /// Number of open walls between two cells of the grid. Entrance and exit are not
    /// counted.
    pub fn removed_wall_count(&self) -> usize {
        self.iter_pos()
            .map(|pos| {
                [Right, Bottom]
                    .into_iter()
                    .filter(|&wall| self.is_passable(pos, wall).is_some())
                    .count()
            })
            .sum()
    }

    /// Breadth-first search over open walls, returns the number of distinct cells
    /// reached, `start` included.
    pub fn reachable_from(&self, start: Dims) -> usize {
        if !self.is_in_bounds(start) {
            return 0;
        }

        let mut seen = HashSet::with_capacity(self.cell_count());
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            for wall in CellWall::SCAN_ORDER {
                if let Some(next) = self.is_passable(pos, wall) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        seen.len()
    }

    /// Checks that both sides of every shared wall agree.
    pub fn walls_consistent(&self) -> bool {
        self.iter_pos().all(|pos| {
            [Right, Bottom].into_iter().all(|wall| match self.neighbor(pos, wall) {
                Some(next) => {
                    self.cells[pos].get_wall(wall) == self.cells[next].get_wall(wall.reverse_wall())
                }
                None => true,
            })
        })
    }

    /// Spanning tree check: `cells - 1` passages and every cell reachable.
    pub fn is_perfect(&self) -> bool {
        self.walls_consistent()
            && self.removed_wall_count() == self.cell_count() - 1
            && self.reachable_from(self.entrance()) == self.cell_count()
    }
}
