//! Random matrix generation.

use rand::{rngs::SmallRng, Rng, SeedableRng};
use shared::domain::Grid;

/// Side length of the matrix the viewer loads on mount.
pub const GRID_SIZE: usize = 40;
/// Smallest cell value produced.
pub const CELL_MIN: u32 = 1;
/// Largest cell value produced.
pub const CELL_MAX: u32 = 8;

/// Builds a `size`×`size` grid using the thread-local RNG.
pub fn generate(size: usize) -> Grid {
    generate_with(size, &mut rand::rng())
}

/// Builds a reproducible grid from `seed`.
pub fn generate_seeded(size: usize, seed: u64) -> Grid {
    generate_with(size, &mut SmallRng::seed_from_u64(seed))
}

/// Builds a `size`×`size` grid, each cell uniform in `CELL_MIN..=CELL_MAX`.
pub fn generate_with<R: Rng>(size: usize, rng: &mut R) -> Grid {
    let rows = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| rng.random_range(CELL_MIN..=CELL_MAX))
                .collect()
        })
        .collect();
    Grid::from_rows(rows)
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
