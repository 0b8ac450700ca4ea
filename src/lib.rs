pub mod constants;
pub mod logging;
pub mod renderer;
pub mod settings;

use std::{
    io::{self, Write},
    time::Duration,
};

use mazecore::{Dims, GridError, Maze};
use thiserror::Error;

use renderer::{ascii::AsciiCanvas, TerminalRenderer};
use settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Cannot create maze: {0}")]
    Maze(#[from] GridError),
    #[error("Cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("No path from entrance to exit in maze with seed {seed}")]
    Unsolved { seed: u64 },
}

/// Everything a single run needs, settings file and command line already merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub size: Dims,
    pub seed: Option<u64>,
    pub animate: bool,
    pub frame_delay: Duration,
    pub solve: bool,
}

/// Result of a run, the maze and the solution if it was requested.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub maze: Maze,
    pub solution: Option<Vec<Dims>>,
}

impl Outcome {
    pub fn canvas(&self) -> AsciiCanvas {
        let mut canvas = AsciiCanvas::from_grid(self.maze.grid());
        if let Some(path) = &self.solution {
            canvas.draw_path(path);
        }
        canvas
    }
}

/// Carves and optionally solves a maze, animating into `out` when asked to.
pub fn generate(options: &RunOptions, out: impl Write) -> Result<Outcome, AppError> {
    let Dims(w, h) = options.size;

    let (maze, solution) = if options.animate {
        let mut renderer = TerminalRenderer::new(out, options.size, options.frame_delay)?;
        let mut maze = Maze::with_renderer(w, h, options.seed, &mut renderer)?;
        let solution = if options.solve {
            maze.solution_with(&mut renderer)
        } else {
            None
        };
        renderer.finish()?;
        (maze, solution)
    } else {
        let mut maze = Maze::new(w, h, options.seed)?;
        let solution = if options.solve { maze.solution() } else { None };
        (maze, solution)
    };

    if options.solve && solution.is_none() {
        log::error!("Generated maze has no solution, seed {}", maze.seed());
        return Err(AppError::Unsolved { seed: maze.seed() });
    }

    Ok(Outcome { maze, solution })
}

/// Generates the maze and prints it with its seed and solution to stdout.
pub fn run(options: &RunOptions) -> Result<(), AppError> {
    let outcome = generate(options, io::stdout())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Seed: {}", outcome.maze.seed())?;
    write!(stdout, "{}", outcome.canvas())?;
    if let Some(path) = &outcome.solution {
        writeln!(stdout, "Solved, path has {} cells", path.len())?;
    }

    Ok(())
}
