use std::fmt;

use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use super::Random;
use crate::{
    dims::Dims,
    grid::{Grid, GridError},
    renderer::Renderer,
};

pub trait MazeGenerator: fmt::Debug {
    /// Carves `grid` into a maze, starting the traversal at `start`.
    ///
    /// All randomness comes from `rng`, so the same seed gives the same maze. The grid is
    /// left with every `visited` flag cleared.
    fn generate(
        &self,
        grid: &mut Grid,
        start: Dims,
        rng: &mut Random,
        renderer: &mut dyn Renderer,
    ) -> Result<(), GridError>;
}

/// Randomized depth-first backtracker.
///
/// Produces a spanning tree of the grid: every cell is reachable and there is exactly
/// one path between any two cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn generate(
        &self,
        grid: &mut Grid,
        start: Dims,
        rng: &mut Random,
        renderer: &mut dyn Renderer,
    ) -> Result<(), GridError> {
        if !grid.is_in_bounds(start) {
            return Err(GridError::OutOfBounds(start));
        }

        let Dims(w, h) = grid.size();
        log::debug!("Carving {}x{} maze from {}", w, h, start);

        grid.open_entrance_and_exit();
        for pos in [grid.entrance(), grid.exit()] {
            renderer.on_cell_drawn(pos, grid.cells[pos].walls());
            renderer.on_frame();
        }

        let mut stack = Vec::with_capacity(grid.cell_count());
        grid.cells[start].visited = true;
        stack.push(start);

        while let Some(current) = stack.pop() {
            let unvisited_neighbors = grid
                .get_neighbors_pos(current)
                .into_iter()
                .filter(|pos| !grid.cells[*pos].visited)
                .collect::<SmallVec<[_; 4]>>();

            match unvisited_neighbors.choose(rng) {
                Some(&next) => {
                    stack.push(current);
                    grid.remove_wall(current, next)?;
                    log::trace!("Carved {} -> {}", current, next);
                    grid.cells[next].visited = true;
                    stack.push(next);
                }
                None => {
                    // dead end, this cell won't change anymore
                    renderer.on_cell_drawn(current, grid.cells[current].walls());
                    renderer.on_frame();
                }
            }
        }

        grid.reset_visited();
        log::debug!("Carved {} passages", grid.removed_wall_count());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::seeded_rng,
        grid::{CellWall, Walls},
        renderer::{NoopRenderer, Recorder},
    };

    fn carve(cols: i32, rows: i32, seed: u64) -> Grid {
        let mut grid = Grid::new(cols, rows).unwrap();
        let (mut rng, _) = seeded_rng(Some(seed));
        DepthFirstSearch
            .generate(&mut grid, Dims::ZERO, &mut rng, &mut NoopRenderer)
            .unwrap();
        grid
    }

    #[test]
    fn spanning_tree_for_many_sizes_and_seeds() {
        for (cols, rows) in [(1, 1), (2, 1), (1, 5), (3, 3), (7, 4), (10, 10), (25, 3)] {
            for seed in 0..20 {
                let grid = carve(cols, rows, seed);
                assert_eq!(
                    grid.removed_wall_count(),
                    (cols * rows - 1) as usize,
                    "{cols}x{rows} seed {seed}"
                );
                assert_eq!(grid.reachable_from(Dims::ZERO), (cols * rows) as usize);
                assert!(grid.walls_consistent());
                assert!(grid.is_perfect());
            }
        }
    }

    #[test]
    fn entrance_and_exit_open() {
        for seed in 0..10 {
            let grid = carve(6, 4, seed);
            assert!(!grid.walls(Dims(0, 0)).unwrap().top);
            assert!(!grid.walls(Dims(5, 3)).unwrap().bottom);
        }
    }

    #[test]
    fn visited_flags_are_cleared() {
        let grid = carve(8, 8, 3);
        assert!(!grid.any_visited());
    }

    #[test]
    fn deterministic_per_seed() {
        assert_eq!(carve(12, 9, 1234), carve(12, 9, 1234));
        // different seeds should (almost surely) differ on a board this big
        assert_ne!(carve(20, 20, 1), carve(20, 20, 2));
    }

    #[test]
    fn other_start_cells() {
        for start in [Dims(2, 2), Dims(4, 0), Dims(0, 3)] {
            let mut grid = Grid::new(5, 4).unwrap();
            let (mut rng, _) = seeded_rng(Some(9));
            DepthFirstSearch
                .generate(&mut grid, start, &mut rng, &mut NoopRenderer)
                .unwrap();
            assert!(grid.is_perfect());
        }
    }

    #[test]
    fn start_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        let (mut rng, _) = seeded_rng(Some(0));
        assert_eq!(
            DepthFirstSearch.generate(&mut grid, Dims(3, 0), &mut rng, &mut NoopRenderer),
            Err(GridError::OutOfBounds(Dims(3, 0)))
        );
    }

    #[test]
    fn single_cell() {
        let grid = carve(1, 1, 77);
        assert_eq!(
            grid.walls(Dims::ZERO).unwrap(),
            Walls {
                top: false,
                bottom: false,
                left: true,
                right: true
            }
        );
        assert_eq!(grid.removed_wall_count(), 0);
    }

    #[test]
    fn two_cells() {
        for seed in 0..5 {
            let grid = carve(2, 1, seed);
            assert_eq!(grid.removed_wall_count(), 1);
            assert!(grid.is_passable(Dims(0, 0), CellWall::Right).is_some());
            assert!(!grid.walls(Dims(0, 0)).unwrap().top);
            assert!(!grid.walls(Dims(1, 0)).unwrap().bottom);
        }
    }

    #[test]
    fn renderer_sees_every_cell_in_final_state() {
        let mut grid = Grid::new(5, 3).unwrap();
        let (mut rng, _) = seeded_rng(Some(5));
        let mut recorder = Recorder::new();
        DepthFirstSearch
            .generate(&mut grid, Dims::ZERO, &mut rng, &mut recorder)
            .unwrap();

        let drawn: Vec<_> = recorder.drawn_cells().collect();
        // entrance and exit once more, up front
        assert_eq!(drawn.len(), grid.cell_count() + 2);
        assert_eq!(drawn[0].0, grid.entrance());
        assert_eq!(drawn[1].0, grid.exit());

        for &(pos, walls) in &drawn[2..] {
            assert_eq!(grid.walls(pos), Some(walls));
        }
        assert_eq!(recorder.frame_count(), drawn.len());
        assert_eq!(recorder.moves().count(), 0);
    }

    #[test]
    fn renderer_does_not_change_result() {
        let mut watched = Grid::new(9, 7).unwrap();
        let (mut rng, _) = seeded_rng(Some(31));
        DepthFirstSearch
            .generate(&mut watched, Dims::ZERO, &mut rng, &mut Recorder::new())
            .unwrap();

        assert_eq!(watched, carve(9, 7, 31));
    }

    #[test]
    fn long_corridor_does_not_overflow() {
        let grid = carve(1, 200_000, 8);
        assert!(grid.is_perfect());
    }
}
