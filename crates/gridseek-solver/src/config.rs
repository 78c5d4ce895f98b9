//! Solver configuration, validation, and error types.
//!
//! [`SolverConfig`] selects the index backend and controls how batches
//! of words are spread over worker threads.
//! [`validate()`](SolverConfig::validate) is called by
//! [`Solver::new`](crate::Solver::new) before anything is built.

use gridseek_matcher::MatcherKind;
use std::error::Error;
use std::fmt;

/// Configuration for [`Solver`](crate::Solver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Substring index backend. Default: suffix automaton.
    pub matcher: MatcherKind,
    /// Number of worker threads for batch solving. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
    /// Batches smaller than this are solved on the calling thread.
    /// Default: 64.
    pub parallel_threshold: usize,
}

impl SolverConfig {
    /// Upper bound applied to explicit worker counts.
    pub const MAX_WORKERS: usize = 64;

    /// A configuration that never spawns worker threads.
    pub fn sequential() -> Self {
        Self {
            worker_count: Some(1),
            ..Self::default()
        }
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, 16),
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_threshold == 0 {
            return Err(ConfigError::ZeroParallelThreshold);
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherKind::default(),
            worker_count: None,
            parallel_threshold: 64,
        }
    }
}

/// Errors detected during [`SolverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `parallel_threshold` is zero.
    ZeroParallelThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroParallelThreshold => {
                write!(f, "parallel_threshold must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {}
