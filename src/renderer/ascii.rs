use std::fmt;

use mazecore::{CellWall, Dims, Grid, Walls};

pub const CORNER: char = '+';
pub const HORIZONTAL_WALL: char = '-';
pub const VERTICAL_WALL: char = '|';
pub const EMPTY: char = ' ';
pub const PATH: char = '*';

/// Canvas position of the center of cell `pos`. Every cell takes one character and
/// walls sit between them.
pub fn cell_center(pos: Dims) -> Dims {
    pos * 2 + Dims::ONE
}

pub fn wall_pos(pos: Dims, wall: CellWall) -> Dims {
    cell_center(pos) + wall.to_coord()
}

pub fn wall_char(wall: CellWall, present: bool) -> char {
    match (wall, present) {
        (_, false) => EMPTY,
        (CellWall::Top | CellWall::Bottom, true) => HORIZONTAL_WALL,
        (CellWall::Left | CellWall::Right, true) => VERTICAL_WALL,
    }
}

pub fn walls_of(walls: Walls) -> [(CellWall, bool); 4] {
    [
        (CellWall::Top, walls.top),
        (CellWall::Bottom, walls.bottom),
        (CellWall::Left, walls.left),
        (CellWall::Right, walls.right),
    ]
}

/// Canvas size for a grid of `size` cells.
pub fn canvas_size(size: Dims) -> Dims {
    size * 2 + Dims::ONE
}

/// Character picture of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiCanvas {
    size: Dims,
    rows: Vec<Vec<char>>,
}

impl AsciiCanvas {
    /// Canvas of a grid with every wall still standing.
    pub fn new(grid_size: Dims) -> Self {
        let size = canvas_size(grid_size);
        let rows = (0..size.1)
            .map(|y| {
                (0..size.0)
                    .map(|x| match (x % 2 == 0, y % 2 == 0) {
                        (true, true) => CORNER,
                        (false, true) => HORIZONTAL_WALL,
                        (true, false) => VERTICAL_WALL,
                        (false, false) => EMPTY,
                    })
                    .collect()
            })
            .collect();

        Self { size, rows }
    }

    pub fn from_grid(grid: &Grid) -> Self {
        let mut canvas = Self::new(grid.size());
        for pos in grid.iter_pos() {
            if let Some(walls) = grid.walls(pos) {
                canvas.draw_cell(pos, walls);
            }
        }
        canvas
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn get(&self, pos: Dims) -> Option<char> {
        if !pos.all_non_negative() {
            return None;
        }
        self.rows
            .get(pos.1 as usize)
            .and_then(|row| row.get(pos.0 as usize))
            .copied()
    }

    pub fn set(&mut self, pos: Dims, c: char) {
        if !pos.all_non_negative() {
            return;
        }
        if let Some(slot) = self
            .rows
            .get_mut(pos.1 as usize)
            .and_then(|row| row.get_mut(pos.0 as usize))
        {
            *slot = c;
        }
    }

    pub fn draw_cell(&mut self, pos: Dims, walls: Walls) {
        for (wall, present) in walls_of(walls) {
            self.set(wall_pos(pos, wall), wall_char(wall, present));
        }
    }

    /// Marks both cells and the passage between them.
    pub fn draw_move(&mut self, from: Dims, to: Dims, c: char) {
        let (a, b) = (cell_center(from), cell_center(to));
        self.set(a, c);
        self.set(Dims((a.0 + b.0) / 2, (a.1 + b.1) / 2), c);
        self.set(b, c);
    }

    pub fn draw_path(&mut self, path: &[Dims]) {
        match path {
            [single] => self.set(cell_center(*single), PATH),
            _ => {
                for step in path.windows(2) {
                    self.draw_move(step[0], step[1], PATH);
                }
            }
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazecore::Maze;

    #[test]
    fn closed_grid() {
        let canvas = AsciiCanvas::new(Dims(2, 1));
        assert_eq!(canvas.size(), Dims(5, 3));
        assert_eq!(canvas.to_string(), "+-+-+\n| | |\n+-+-+\n");
    }

    #[test]
    fn two_cell_maze_with_path() {
        let mut maze = Maze::new(2, 1, Some(3)).unwrap();
        let path = maze.solution().unwrap();

        let mut canvas = AsciiCanvas::from_grid(maze.grid());
        assert_eq!(canvas.to_string(), "+ +-+\n|   |\n+-+ +\n");

        canvas.draw_path(&path);
        assert_eq!(canvas.to_string(), "+ +-+\n|***|\n+-+ +\n");
    }

    #[test]
    fn single_cell_path() {
        let mut maze = Maze::new(1, 1, Some(0)).unwrap();
        let path = maze.solution().unwrap();
        let mut canvas = AsciiCanvas::from_grid(maze.grid());
        canvas.draw_path(&path);
        assert_eq!(canvas.to_string(), "+ +\n|*|\n+ +\n");
    }

    #[test]
    fn geometry() {
        assert_eq!(cell_center(Dims(0, 0)), Dims(1, 1));
        assert_eq!(cell_center(Dims(2, 1)), Dims(5, 3));
        assert_eq!(wall_pos(Dims(2, 1), CellWall::Top), Dims(5, 2));
        assert_eq!(wall_pos(Dims(2, 1), CellWall::Right), Dims(6, 3));
        assert_eq!(wall_char(CellWall::Left, true), VERTICAL_WALL);
        assert_eq!(wall_char(CellWall::Bottom, false), EMPTY);
    }

    #[test]
    fn out_of_canvas_is_ignored() {
        let mut canvas = AsciiCanvas::new(Dims(1, 1));
        let before = canvas.clone();
        canvas.set(Dims(-1, 0), PATH);
        canvas.set(Dims(3, 0), PATH);
        assert_eq!(canvas, before);
        assert_eq!(canvas.get(Dims(9, 9)), None);
    }
}
