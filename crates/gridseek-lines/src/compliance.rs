//! Line map compliance test helpers.
//!
//! These functions verify that an extracted [`LineMap`] agrees with the
//! grid it came from. Reused by the unit tests and property tests.

use crate::geometry;
use crate::map::LineMap;
use gridseek_core::{Cell, Grid, LineFamily};
use std::collections::HashMap;

/// Assert that every `(line, offset)` maps back to the cell holding that
/// line's character.
pub fn assert_round_trip(grid: &Grid, map: &LineMap) {
    for (id, text) in map.iter() {
        for (offset, &ch) in text.iter().enumerate() {
            let cell = map
                .cell_at(id, offset)
                .unwrap_or_else(|| panic!("{id} offset {offset} has no cell"));
            assert_eq!(
                grid.get(cell.x, cell.y),
                Some(ch),
                "line {id} offset {offset} maps to {cell}, which does not hold '{ch}'"
            );
        }
    }
}

/// Assert that the lines of `families` visit every grid cell exactly once.
pub fn assert_exact_cover(grid: &Grid, map: &LineMap, families: &[LineFamily]) {
    let mut visits: HashMap<Cell, usize> = HashMap::new();
    for (id, text) in map.iter().filter(|(id, _)| families.contains(&id.family)) {
        for offset in 0..text.len() {
            let cell = geometry::cell_at(id, offset, map.width());
            *visits.entry(cell).or_default() += 1;
        }
    }
    for y in 0..i64::from(grid.height()) {
        for x in 0..i64::from(grid.width()) {
            let n = visits.remove(&Cell::new(x, y)).unwrap_or(0);
            assert_eq!(n, 1, "cell ({x}, {y}) visited {n} times by {families:?}");
        }
    }
    assert!(
        visits.is_empty(),
        "{families:?} visited cells outside the grid: {visits:?}"
    );
}

/// Assert that no line is empty and none is longer than its axis allows.
pub fn assert_line_lengths(grid: &Grid, map: &LineMap) {
    let (w, h) = (grid.width() as usize, grid.height() as usize);
    for (id, text) in map.iter() {
        let max = match id.family {
            LineFamily::H => w,
            LineFamily::V => h,
            _ => w.min(h),
        };
        assert!(!text.is_empty(), "line {id} is empty");
        assert!(text.len() <= max, "line {id} has {} chars, max {max}", text.len());
        assert_eq!(text.len(), geometry::line_len(id, grid.width(), grid.height()));
    }
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &Grid, map: &LineMap) {
    assert_round_trip(grid, map);
    assert_line_lengths(grid, map);
    assert_exact_cover(grid, map, &[LineFamily::H]);
    assert_exact_cover(grid, map, &[LineFamily::V]);
    assert_exact_cover(grid, map, &[LineFamily::DL, LineFamily::DT]);
    assert_exact_cover(grid, map, &[LineFamily::DTB, LineFamily::DR]);
    assert_eq!(map.total_chars(), 4 * grid.cell_count());
}
