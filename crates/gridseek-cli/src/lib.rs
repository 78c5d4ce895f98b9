//! JSON front end for the gridseek solver.
//!
//! Decodes `{"grid": [...], "words": [...]}` puzzle records, solves them,
//! and encodes the found words as `from`/`to` moves. Used by the
//! `gridseek` binary; exposed as a library so sessions can be driven
//! from tests with in-memory readers and writers.

#![forbid(unsafe_code)]

pub mod error;
pub mod input;
pub mod log;
pub mod output;
pub mod session;

pub use error::CliError;
pub use input::PuzzleInput;
pub use output::{encode_moves, MoveRecord};
pub use session::{run_interactive, solve_record, SessionOptions};
