//! Benchmark puzzles for the gridseek solver.
//!
//! - [`reference_puzzle`]: square random grid plus a deterministic word
//!   list, three quarters of which occur in the grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridseek_core::{Cell, Direction, Grid};
use gridseek_test_utils::random_grid;

/// Letters used to fill benchmark grids.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Build a `size`x`size` uppercase grid and `word_count` target words.
///
/// Every fourth word (`i % 4 == 3`) is lowercase and never occurs. The
/// rest are read off the grid from a pseudo-random start cell along a
/// pseudo-random direction, 4 to 8 letters long, truncated at the edge.
/// `size` must be non-zero.
pub fn reference_puzzle(size: u32, word_count: usize, seed: u64) -> (Grid, Vec<String>) {
    let grid = random_grid(size, size, ALPHABET, seed);
    let words = (0..word_count as u64)
        .map(|i| {
            if i % 4 == 3 {
                return format!("missing{i}");
            }
            let h = (i ^ seed).wrapping_mul(6364136223846793007);
            let direction = Direction::ALL[(h % 8) as usize];
            let len = 4 + ((h >> 8) % 5) as usize;
            let x = ((h >> 16) % u64::from(size)) as i64;
            let y = ((h >> 40) % u64::from(size)) as i64;
            read_along(&grid, Cell::new(x, y), direction, len)
        })
        .collect();
    (grid, words)
}

fn read_along(grid: &Grid, start: Cell, direction: Direction, len: usize) -> String {
    let mut word = String::with_capacity(len);
    let mut cell = start;
    while word.len() < len {
        match grid.get(cell.x, cell.y) {
            Some(ch) => word.push(ch),
            None => break,
        }
        cell = cell.offset(direction.delta(), 1);
    }
    word
}
