//! Reusable puzzle fixtures.
//!
//! - [`cat_dog`]: the 6×3 `CATDOG` grid.
//! - [`cat_down`]: a 6×3 grid where `CAT` only reads down column 2.
//! - [`compass_rose`]: one word planted in each of the eight directions.

use crate::{Placement, PuzzleBuilder};
use gridseek_core::{Direction, Grid};

/// Rows `CATDOG / XXAXXX / XXTXXX`.
///
/// `CAT` reads across row 0 from `(0, 0)` and `DOG` from `(3, 0)`.
/// Column 2 reads `TAT`, so `TAT` is found there and `TA` is found in
/// row 0 first.
pub fn cat_dog() -> Grid {
    Grid::from_rows(["CATDOG", "XXAXXX", "XXTXXX"]).expect("fixture grid is rectangular")
}

/// Rows `XXCDOG / XXAXXX / XXTXXX`: `CAT` reads down column 2 only.
pub fn cat_down() -> Grid {
    Grid::from_rows(["XXCDOG", "XXAXXX", "XXTXXX"]).expect("fixture grid is rectangular")
}

/// A 9×9 puzzle with one distinct word planted per compass direction.
///
/// Filler is drawn from digits, which never occur in the planted words,
/// so each word has exactly one placement.
pub fn compass_rose() -> (Grid, Vec<Placement>) {
    PuzzleBuilder::new(9, 9)
        .filler("0123456789")
        .seed(42)
        .place("EAST", (1, 0), Direction::E)
        .place("WEST", (8, 8), Direction::W)
        .place("NORTH", (0, 8), Direction::N)
        .place("SOUTH", (8, 1), Direction::S)
        .place("SEAL", (2, 2), Direction::SE)
        .place("NAIL", (2, 7), Direction::NE)
        .place("SWAN", (6, 1), Direction::SW)
        .place("NEWT", (7, 5), Direction::NW)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_rose_plants_all_directions() {
        let (grid, placements) = compass_rose();
        assert_eq!(grid.width(), 9);
        let mut dirs: Vec<_> = placements.iter().map(|p| p.direction).collect();
        dirs.sort();
        dirs.dedup();
        assert_eq!(dirs.len(), 8);
    }
}
