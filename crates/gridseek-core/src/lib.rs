//! Core types for the gridseek word-search engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid model shared by every other crate: the immutable [`Grid`],
//! signed [`Cell`] coordinates, the eight compass [`Direction`]s, and the
//! six [`LineFamily`] shapes that partition a grid into reading lines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod grid;
pub mod id;

pub use direction::{Direction, ParseDirectionError};
pub use error::GridError;
pub use grid::Grid;
pub use id::{Cell, LineFamily, LineId, DIRECTION_PAIRS};
