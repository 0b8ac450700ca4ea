use std::fmt;

use crate::{
    dims::Dims,
    grid::{CellWall, Grid},
    renderer::Renderer,
};

pub trait MazeSolver: fmt::Debug {
    /// Searches a path from the entrance to the exit of `grid`.
    ///
    /// Every cell explored is left marked as visited. Returns the path, both ends
    /// included, or `None` if the exit can't be reached.
    fn solve_path(&self, grid: &mut Grid, renderer: &mut dyn Renderer) -> Option<Vec<Dims>>;

    fn solve(&self, grid: &mut Grid, renderer: &mut dyn Renderer) -> bool {
        self.solve_path(grid, renderer).is_some()
    }
}

/// Depth-first search with backtracking, trying up, down, left and right in this order.
///
/// Visited cells are never unmarked, which is only correct on perfect mazes, where
/// each cell has a single way in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSolver;

struct Frame {
    pos: Dims,
    next_way: usize,
}

impl DepthFirstSolver {
    /// Next open, unvisited neighbor of the frame's cell, advancing the frame past it.
    fn next_step(grid: &Grid, frame: &mut Frame) -> Option<Dims> {
        while let Some(&wall) = CellWall::SCAN_ORDER.get(frame.next_way) {
            frame.next_way += 1;

            if let Some(next) = grid.is_passable(frame.pos, wall) {
                if !grid.cells[next].visited {
                    return Some(next);
                }
            }
        }

        None
    }
}

impl MazeSolver for DepthFirstSolver {
    fn solve_path(&self, grid: &mut Grid, renderer: &mut dyn Renderer) -> Option<Vec<Dims>> {
        if grid.any_visited() {
            log::warn!("Solving a grid with stale visited flags, some cells will be skipped");
        }

        let (start, goal) = (grid.entrance(), grid.exit());
        log::debug!("Solving from {} to {}", start, goal);

        grid.cells[start].visited = true;
        renderer.on_frame();
        if start == goal {
            return Some(vec![start]);
        }

        let mut stack = vec![Frame {
            pos: start,
            next_way: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let from = frame.pos;

            match Self::next_step(grid, frame) {
                Some(next) => {
                    log::trace!("Move {} -> {}", from, next);
                    renderer.on_move(from, next, false);
                    grid.cells[next].visited = true;
                    renderer.on_frame();

                    stack.push(Frame {
                        pos: next,
                        next_way: 0,
                    });

                    if next == goal {
                        let path: Vec<_> = stack.iter().map(|f| f.pos).collect();
                        log::debug!("Found path of {} cells", path.len());
                        return Some(path);
                    }
                }
                None => {
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        log::trace!("Undo {} -> {}", parent.pos, from);
                        renderer.on_move(parent.pos, from, true);
                        renderer.on_frame();
                    }
                }
            }
        }

        log::debug!("Exit is unreachable");
        None
    }
}
