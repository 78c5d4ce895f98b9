//! Errors from building a solver or running a batch.

use crate::config::ConfigError;
use gridseek_core::GridError;
use std::error::Error;
use std::fmt;

/// Errors from [`Solver`](crate::Solver).
///
/// A word that is absent from the grid is not an error; it yields
/// [`WordResult::NotFound`](crate::WordResult::NotFound).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The grid failed validation; no results are produced.
    InvalidGrid(GridError),
    /// The solver configuration failed validation.
    Config(ConfigError),
    /// A worker thread panicked during batch solving.
    WorkerPanicked,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "invalid solver config: {e}"),
            Self::WorkerPanicked => write!(f, "a solver worker thread panicked"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::WorkerPanicked => None,
        }
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        Self::InvalidGrid(e)
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
