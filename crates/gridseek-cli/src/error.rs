//! Error type for the command-line front end.

use gridseek::solver::SolveError;
use std::io;

/// Failures surfaced to the user by the `gridseek` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Solve(#[from] SolveError),
}
