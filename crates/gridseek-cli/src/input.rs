//! Decoding of JSON puzzle records.

use crate::error::CliError;
use gridseek::types::Grid;
use serde::Deserialize;

/// One grid row: either a string, or an array of one-character strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GridRow {
    /// `"CATDOG"`
    Text(String),
    /// `["C", "A", "T"]`
    Cells(Vec<String>),
}

impl GridRow {
    /// The row's characters as a single string.
    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Cells(cells) => cells.concat(),
        }
    }
}

/// A puzzle record: a grid and the words to find in it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PuzzleInput {
    /// Grid rows, top to bottom.
    pub grid: Vec<GridRow>,
    /// Target words, in output order.
    pub words: Vec<String>,
}

impl PuzzleInput {
    /// Decode a record from JSON text.
    pub fn parse(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the rows into a [`Grid`], returning it with the words.
    pub fn into_parts(self) -> Result<(Grid, Vec<String>), CliError> {
        let rows: Vec<String> = self.grid.into_iter().map(GridRow::into_string).collect();
        let grid = Grid::from_rows(&rows).map_err(gridseek::solver::SolveError::from)?;
        Ok((grid, self.words))
    }
}
