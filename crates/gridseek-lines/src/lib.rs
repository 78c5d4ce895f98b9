//! Line extraction for gridseek.
//!
//! A grid is decomposed into 1-D [`LineMap`] entries along six line
//! families: rows, columns, and two anchor sets for each diagonal
//! orientation. The [`geometry`] module holds the single table of start
//! cells and step vectors that both extraction and the inverse
//! coordinate mapping are derived from.
//!
//! # Invariant
//!
//! For every line `id` and every offset `k < len(id)`,
//! `grid[cell_at(id, k)] == lines[id][k]`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod map;

#[cfg(test)]
pub(crate) mod compliance;

pub use geometry::{cell_at, cell_at_checked, index_range, line_ids, line_len, start_cell, step_vector};
pub use map::LineMap;
