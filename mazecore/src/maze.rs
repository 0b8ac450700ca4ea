use crate::{
    algorithms::{seeded_rng, DepthFirstSearch, DepthFirstSolver, MazeGenerator, MazeSolver},
    dims::Dims,
    grid::{Grid, GridError},
    renderer::{NoopRenderer, Renderer},
};

/// Fully carved maze together with the seed it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    seed: u64,
}

impl Maze {
    /// Carves a `cols` x `rows` maze. Without a seed a random one is picked, see
    /// [`Maze::seed`].
    pub fn new(cols: i32, rows: i32, seed: Option<u64>) -> Result<Self, GridError> {
        Self::with_renderer(cols, rows, seed, &mut NoopRenderer)
    }

    pub fn with_renderer(
        cols: i32,
        rows: i32,
        seed: Option<u64>,
        renderer: &mut dyn Renderer,
    ) -> Result<Self, GridError> {
        let mut grid = Grid::new(cols, rows)?;
        let (mut rng, seed) = seeded_rng(seed);
        log::info!("Generating {}x{} maze with seed {}", cols, rows, seed);

        let start = grid.entrance();
        DepthFirstSearch.generate(&mut grid, start, &mut rng, renderer)?;

        Ok(Self { grid, seed })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> Dims {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn solve(&mut self) -> bool {
        self.solve_with(&mut NoopRenderer)
    }

    pub fn solve_with(&mut self, renderer: &mut dyn Renderer) -> bool {
        self.solution_with(renderer).is_some()
    }

    pub fn solution(&mut self) -> Option<Vec<Dims>> {
        self.solution_with(&mut NoopRenderer)
    }

    /// Solves the maze from scratch, forgetting any previous attempt.
    pub fn solution_with(&mut self, renderer: &mut dyn Renderer) -> Option<Vec<Dims>> {
        self.grid.reset_visited();
        DepthFirstSolver.solve_path(&mut self.grid, renderer)
    }
}
