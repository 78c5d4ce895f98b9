//! Substring indexes over the lines of a grid.
//!
//! An index is built once from a [`LineMap`](gridseek_lines::LineMap)
//! and answers [`locate`](SubstringIndex::locate) queries: which line
//! contains a pattern, and at what offset.
//!
//! # Backends
//!
//! - [`SuffixAutomaton`]: generalized suffix automaton over all lines,
//!   linear-time construction and `O(|pattern|)` lookups.
//! - [`LinearScan`]: scans every line per query. Reference
//!   implementation for tests and tiny grids.
//!
//! # Tie-break
//!
//! Both backends report the same hit when a pattern occurs more than
//! once: the first line in [`LineId`](gridseek_core::LineId) order that
//! contains it, at its leftmost offset within that line.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod index;
pub mod scan;

pub use automaton::SuffixAutomaton;
pub use index::{Hit, MatcherKind, ParseMatcherKindError, SubstringIndex};
pub use scan::LinearScan;
