//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from constructing a [`Grid`](crate::Grid).
///
/// A malformed grid is a precondition violation: construction fails fast
/// and never truncates or pads rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows at all.
    NoRows,
    /// The first row is empty, so the grid has zero columns.
    NoColumns,
    /// A row's length differs from the first row's length.
    RaggedRow {
        /// 0-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A dimension or the cell count exceeds the supported maximum.
    DimensionTooLarge {
        /// Which limit (`"width"`, `"height"` or `"cell count"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The maximum allowed size.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "invalid grid: no rows"),
            Self::NoColumns => write!(f, "invalid grid: rows have zero columns"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "invalid grid: {name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_row_display_names_row_and_lengths() {
        let msg = GridError::RaggedRow {
            row: 2,
            expected: 6,
            found: 4,
        }
        .to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("4 columns"));
        assert!(msg.contains("expected 6"));
    }

    #[test]
    fn every_variant_is_reported_as_invalid_grid() {
        let errors = [
            GridError::NoRows,
            GridError::NoColumns,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3,
            },
            GridError::DimensionTooLarge {
                name: "width",
                value: 10,
                max: 5,
            },
        ];
        for err in errors {
            assert!(err.to_string().starts_with("invalid grid"), "{err}");
        }
    }
}
