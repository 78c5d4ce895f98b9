//! Line geometry: index ranges, start cells, step vectors, and lengths.
//!
//! | Family | Indices  | Start        | Step     |
//! |--------|----------|--------------|----------|
//! | `H`    | `0..H`   | `(0, i)`     | `(+1, 0)`|
//! | `V`    | `0..W`   | `(i, 0)`     | `(0, +1)`|
//! | `DL`   | `0..H`   | `(0, i)`     | `(+1,+1)`|
//! | `DT`   | `1..W`   | `(i, 0)`     | `(+1,+1)`|
//! | `DTB`  | `0..W`   | `(i, 0)`     | `(-1,+1)`|
//! | `DR`   | `1..H`   | `(W-1, i)`   | `(-1,+1)`|
//!
//! Extraction walks `start + k * step` for `k in 0..len`, and
//! [`cell_at`] evaluates the same expression, so the mapping from
//! `(line, offset)` back to a cell is exact by construction.

use gridseek_core::{Cell, LineFamily, LineId};
use std::ops::Range;

/// Valid anchor indices for `family` on a `width × height` grid.
pub fn index_range(family: LineFamily, width: u32, height: u32) -> Range<u32> {
    match family {
        LineFamily::H | LineFamily::DL => 0..height,
        LineFamily::V | LineFamily::DTB => 0..width,
        LineFamily::DT => 1..width,
        LineFamily::DR => 1..height,
    }
}

/// Every line identifier of a `width × height` grid, in [`LineId`] order.
pub fn line_ids(width: u32, height: u32) -> impl Iterator<Item = LineId> {
    LineFamily::ALL.into_iter().flat_map(move |family| {
        index_range(family, width, height).map(move |index| LineId::new(family, index))
    })
}

/// The first cell of line `id`.
pub fn start_cell(id: LineId, width: u32) -> Cell {
    let i = i64::from(id.index);
    match id.family {
        LineFamily::H | LineFamily::DL => Cell::new(0, i),
        LineFamily::V | LineFamily::DT | LineFamily::DTB => Cell::new(i, 0),
        LineFamily::DR => Cell::new(i64::from(width) - 1, i),
    }
}

/// Step `(dx, dy)` between consecutive cells of a line in `family`.
pub const fn step_vector(family: LineFamily) -> (i64, i64) {
    match family {
        LineFamily::H => (1, 0),
        LineFamily::V => (0, 1),
        LineFamily::DL | LineFamily::DT => (1, 1),
        LineFamily::DTB | LineFamily::DR => (-1, 1),
    }
}

/// Number of cells on line `id` before the walk leaves the grid.
///
/// Assumes `id.index` lies in [`index_range`]; the result is then at
/// least 1.
pub fn line_len(id: LineId, width: u32, height: u32) -> usize {
    let (w, h, i) = (width as usize, height as usize, id.index as usize);
    match id.family {
        LineFamily::H => w,
        LineFamily::V => h,
        LineFamily::DL | LineFamily::DR => w.min(h - i),
        LineFamily::DT => (w - i).min(h),
        LineFamily::DTB => (i + 1).min(h),
    }
}

/// Map `(id, offset)` to its grid cell: `start_cell(id) + offset * step`.
///
/// Unchecked: an offset past the end of the line yields a cell off the
/// line (possibly off the grid). See [`cell_at_checked`].
pub fn cell_at(id: LineId, offset: usize, width: u32) -> Cell {
    start_cell(id, width).offset(step_vector(id.family), offset as i64)
}

/// Like [`cell_at`], but `None` unless `id` is a line of this grid and
/// `offset` falls inside it.
pub fn cell_at_checked(id: LineId, offset: usize, width: u32, height: u32) -> Option<Cell> {
    if !index_range(id.family, width, height).contains(&id.index) {
        return None;
    }
    if offset >= line_len(id, width, height) {
        return None;
    }
    Some(cell_at(id, offset, width))
}
