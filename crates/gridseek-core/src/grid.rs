//! The immutable character grid.

use crate::error::GridError;

/// A rectangular grid of characters, stored row-major.
///
/// Cell `(x, y)` is column `x` of row `y`; `(0, 0)` is the top-left.
/// Construction validates shape and the grid is read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl Grid {
    /// Maximum size of either dimension.
    pub const MAX_DIM: usize = u32::MAX as usize;

    /// Maximum number of cells.
    ///
    /// Line extraction yields `4 * W * H` characters and a suffix
    /// automaton over them needs up to twice that many states plus a
    /// root, all addressed by `u32`.
    pub const MAX_CELLS: usize = (u32::MAX as usize - 1) / 8;

    /// Build a grid from rows of characters.
    ///
    /// Returns `Err` if there are no rows, the rows are empty, any row's
    /// length differs from the first row's, or a dimension exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::NoRows)?;
        let width = first.len();
        if width == 0 {
            return Err(GridError::NoColumns);
        }
        check_size(width, rows.len())?;
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                found: r.len(),
            });
        }
        let height = rows.len();
        let cells: Vec<char> = rows.into_iter().flatten().collect();
        Ok(Self {
            width: width as u32,
            height: height as u32,
            cells,
        })
    }

    /// Build a grid from string rows, one character per cell.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            rows.into_iter()
                .map(|r| r.as_ref().chars().collect())
                .collect(),
        )
    }

    /// Number of columns (`W`).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (`H`).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The character at column `x`, row `y`, or `None` if out of bounds.
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Row `y` as a slice, or `None` if out of bounds.
    pub fn row(&self, y: u32) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width as usize)
    }
}

/// Reject dimensions that do not fit `u32`, or a cell count above
/// [`Grid::MAX_CELLS`].
fn check_size(width: usize, height: usize) -> Result<(), GridError> {
    if width > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width,
            max: Grid::MAX_DIM,
        });
    }
    if height > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "height",
            value: height,
            max: Grid::MAX_DIM,
        });
    }
    let cells = width.saturating_mul(height);
    if cells > Grid::MAX_CELLS {
        return Err(GridError::DimensionTooLarge {
            name: "cell count",
            value: cells,
            max: Grid::MAX_CELLS,
        });
    }
    Ok(())
}
