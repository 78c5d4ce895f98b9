//! The extracted line map.

use crate::geometry;
use gridseek_core::{Cell, Grid, LineId};
use indexmap::IndexMap;

/// Every line of a grid, keyed by [`LineId`], in `LineId` order.
///
/// Built once by [`LineMap::extract`] and read-only afterwards. Each
/// grid cell appears in exactly one line per family group (rows,
/// columns, down-right diagonals, down-left diagonals), so the total
/// character count is `4 * W * H`.
#[derive(Clone, Debug)]
pub struct LineMap {
    width: u32,
    height: u32,
    lines: IndexMap<LineId, Vec<char>>,
}

impl LineMap {
    /// Read every line of `grid` along its family's step vector.
    pub fn extract(grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut lines = IndexMap::new();
        for id in geometry::line_ids(width, height) {
            let len = geometry::line_len(id, width, height);
            let start = geometry::start_cell(id, width);
            let step = geometry::step_vector(id.family);
            let text: Vec<char> = (0..len as i64)
                .filter_map(|k| {
                    let c = start.offset(step, k);
                    grid.get(c.x, c.y)
                })
                .collect();
            debug_assert_eq!(text.len(), len, "line {id} walked off the grid");
            lines.insert(id, text);
        }
        let map = Self {
            width,
            height,
            lines,
        };
        log::debug!(
            "extracted {} lines ({} chars) from {}x{} grid",
            map.len(),
            map.total_chars(),
            width,
            height
        );
        map
    }

    /// Grid width the lines were extracted from.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height the lines were extracted from.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `false` for any extracted grid, which has at least one row.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line lengths.
    pub fn total_chars(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// The characters of line `id`, if it exists.
    pub fn get(&self, id: LineId) -> Option<&[char]> {
        self.lines.get(&id).map(Vec::as_slice)
    }

    /// Iterate over `(id, characters)` in `LineId` order.
    pub fn iter(&self) -> impl Iterator<Item = (LineId, &[char])> + '_ {
        self.lines.iter().map(|(id, text)| (*id, text.as_slice()))
    }

    /// The grid cell at `offset` on line `id`.
    ///
    /// `None` if `id` is not a line of this grid or `offset` is past its end.
    pub fn cell_at(&self, id: LineId, offset: usize) -> Option<Cell> {
        geometry::cell_at_checked(id, offset, self.width, self.height)
    }
}
