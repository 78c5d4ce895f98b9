//! Gridseek: find words hidden in a character grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridseek sub-crates. For most users, adding `gridseek` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridseek::prelude::*;
//!
//! let solver = Solver::from_rows(
//!     ["XXCDOG", "XXAXXX", "XXTXXX"],
//!     SolverConfig::default(),
//! )
//! .unwrap();
//!
//! let solutions = solver.solve(&["CAT", "GOD", "EMU"]).unwrap();
//!
//! let cat = solutions[0].result.placement().unwrap();
//! assert_eq!(cat.start, Cell::new(2, 0));
//! assert_eq!(cat.direction, Direction::S);
//! assert_eq!(solutions[0].end, Some(Cell::new(2, 3)));
//!
//! // "GOD" is "DOG" read right to left.
//! assert_eq!(solutions[1].to_string(), "GOD: (5, 0) W");
//! assert_eq!(solutions[2].result, WordResult::NotFound);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridseek-core` | `Grid`, `Cell`, `Direction`, line identifiers |
//! | [`lines`] | `gridseek-lines` | Line extraction and coordinate mapping |
//! | [`matcher`] | `gridseek-matcher` | Substring indexes over lines |
//! | [`solver`] | `gridseek-solver` | Word location, projection, batch solving |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gridseek-core`).
pub use gridseek_core as types;

/// Line extraction and geometry (`gridseek-lines`).
pub use gridseek_lines as lines;

/// Substring indexes (`gridseek-matcher`).
pub use gridseek_matcher as matcher;

/// Word location and batch solving (`gridseek-solver`).
pub use gridseek_solver as solver;

/// The types needed for typical use.
pub mod prelude {
    pub use gridseek_core::{Cell, Direction, Grid, GridError, LineFamily, LineId};
    pub use gridseek_lines::LineMap;
    pub use gridseek_matcher::{MatcherKind, SubstringIndex};
    pub use gridseek_solver::{
        project, Move, Placement, Solution, SolveError, Solver, SolverConfig, WordLocator,
        WordResult,
    };
}
