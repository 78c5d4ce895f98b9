//! Test utilities for gridseek development.
//!
//! Provides seeded random grids ([`random_grid`]) and a [`PuzzleBuilder`]
//! that plants words at known cells and directions, so tests can assert
//! exactly where the solver should find them.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridseek_core::{Cell, Direction, Grid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `width × height` grid filled with characters drawn from `alphabet`.
///
/// Deterministic for a given seed.
///
/// # Panics
///
/// Panics if `alphabet` is empty or a dimension is zero.
pub fn random_grid(width: u32, height: u32, alphabet: &str, seed: u64) -> Grid {
    let chars: Vec<char> = alphabet.chars().collect();
    assert!(!chars.is_empty(), "alphabet must not be empty");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<char>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| chars[rng.random_range(0..chars.len())])
                .collect()
        })
        .collect();
    Grid::new(rows).expect("random_grid dimensions must be non-zero")
}

/// A word planted by [`PuzzleBuilder::place`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Cell,
    pub direction: Direction,
}

impl Placement {
    /// The cell one step past the word's last letter.
    pub fn end(&self) -> Cell {
        self.start
            .offset(self.direction.delta(), self.word.chars().count() as i64)
    }
}

/// Builds a grid with words planted at chosen cells and directions.
///
/// Unplanted cells hold seeded filler drawn from `filler_alphabet`, so a
/// filler alphabet disjoint from the planted words keeps every
/// placement unique.
pub struct PuzzleBuilder {
    width: u32,
    height: u32,
    cells: Vec<Option<char>>,
    placements: Vec<Placement>,
    filler_alphabet: Vec<char>,
    seed: u64,
}

impl PuzzleBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "puzzle must have at least one cell");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            placements: Vec::new(),
            filler_alphabet: vec!['.'],
            seed: 0,
        }
    }

    /// Characters used for unplanted cells (default: `.`).
    pub fn filler(mut self, alphabet: &str) -> Self {
        self.filler_alphabet = alphabet.chars().collect();
        assert!(!self.filler_alphabet.is_empty(), "filler must not be empty");
        self
    }

    /// Seed for filler generation (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Plant `word` starting at `start`, reading toward `direction`.
    ///
    /// # Panics
    ///
    /// Panics if the word leaves the grid or disagrees with a letter
    /// already planted in a shared cell.
    pub fn place(mut self, word: &str, start: impl Into<Cell>, direction: Direction) -> Self {
        let start = start.into();
        for (k, ch) in word.chars().enumerate() {
            let c = start.offset(direction.delta(), k as i64);
            let idx = self
                .index(c)
                .unwrap_or_else(|| panic!("'{word}' leaves the grid at {c}"));
            match self.cells[idx] {
                Some(existing) if existing != ch => {
                    panic!("'{word}' conflicts at {c}: '{existing}' already planted")
                }
                _ => self.cells[idx] = Some(ch),
            }
        }
        self.placements.push(Placement {
            word: word.to_string(),
            start,
            direction,
        });
        self
    }

    /// Words planted so far.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Fill the remaining cells and return the grid with its placements.
    pub fn build(self) -> (Grid, Vec<Placement>) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let w = self.width as usize;
        let filled: Vec<char> = self
            .cells
            .iter()
            .map(|c| {
                c.unwrap_or_else(|| {
                    self.filler_alphabet[rng.random_range(0..self.filler_alphabet.len())]
                })
            })
            .collect();
        let rows: Vec<Vec<char>> = filled.chunks(w).map(<[char]>::to_vec).collect();
        let grid = Grid::new(rows).expect("builder dimensions are non-zero");
        (grid, self.placements)
    }

    fn index(&self, c: Cell) -> Option<usize> {
        if c.x < 0 || c.y < 0 || c.x >= i64::from(self.width) || c.y >= i64::from(self.height) {
            return None;
        }
        Some(c.y as usize * self.width as usize + c.x as usize)
    }
}
