pub mod generator;
pub mod solver;

pub use generator::{DepthFirstSearch, MazeGenerator};
pub use solver::{DepthFirstSolver, MazeSolver};

use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a [`Random`], drawing a fresh seed when none is given.
///
/// Returns the seed actually used, so the maze can be reproduced later.
pub fn seeded_rng(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}
