//! Word location and batch solving for gridseek.
//!
//! [`Solver`] owns a grid, its [`LineMap`](gridseek_lines::LineMap) and
//! a [`SubstringIndex`](gridseek_matcher::SubstringIndex), all built once
//! in [`Solver::new`]. Each target word is then resolved independently
//! by a [`WordLocator`]: the word is looked up as written, then
//! reversed, and a hit is mapped back to a start cell and compass
//! direction. [`project`] extends a placement to its end cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod locator;
pub mod projector;
pub mod solver;

pub use config::{ConfigError, SolverConfig};
pub use error::SolveError;
pub use locator::{Placement, WordLocator, WordResult};
pub use projector::{project, Move};
pub use solver::{Solution, Solver};
