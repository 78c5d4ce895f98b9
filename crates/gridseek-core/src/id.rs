//! Line identifiers, line families, and the [`Cell`] coordinate type.

use crate::direction::Direction;
use std::fmt;

/// A grid coordinate: `x` is the column, `y` is the row.
///
/// Signed so that cells projected past a grid edge stay representable;
/// cells produced by line extraction are always in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing rightward.
    pub x: i64,
    /// Row, growing downward.
    pub y: i64,
}

impl Cell {
    /// Construct a cell from `(x, y)`.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell `n` steps away along `(dx, dy)`.
    pub const fn offset(self, (dx, dy): (i64, i64), n: i64) -> Self {
        Self {
            x: self.x + dx * n,
            y: self.y + dy * n,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// One of the six geometric line shapes.
///
/// `DL` + `DT` together cover every down-right diagonal exactly once
/// (anchored on the left edge and on the top edge past column 0).
/// `DTB` + `DR` do the same for down-left diagonals (anchored on the top
/// edge and on the right edge past row 0).
///
/// Variant order is the indexing order of lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineFamily {
    /// Rows, read left to right.
    H = 0,
    /// Columns, read top to bottom.
    V = 1,
    /// Down-right diagonals anchored on the left edge.
    DL = 2,
    /// Down-right diagonals anchored on the top edge.
    DT = 3,
    /// Down-left diagonals anchored on the top edge, including the
    /// single-cell line at the top-left corner.
    DTB = 4,
    /// Down-left diagonals anchored on the right edge.
    DR = 5,
}

/// `(forward, reverse)` direction labels per family, indexed by
/// `family as usize`.
///
/// Forward applies when a word reads in the family's step order; reverse
/// applies when the word's reversal matched.
pub const DIRECTION_PAIRS: [(Direction, Direction); 6] = [
    (Direction::E, Direction::W),
    (Direction::S, Direction::N),
    (Direction::SE, Direction::NW),
    (Direction::SE, Direction::NW),
    (Direction::SW, Direction::NE),
    (Direction::SW, Direction::NE),
];

impl LineFamily {
    /// All families in indexing order.
    pub const ALL: [LineFamily; 6] = [
        LineFamily::H,
        LineFamily::V,
        LineFamily::DL,
        LineFamily::DT,
        LineFamily::DTB,
        LineFamily::DR,
    ];

    /// Short label, e.g. `"DTB"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::V => "V",
            Self::DL => "DL",
            Self::DT => "DT",
            Self::DTB => "DTB",
            Self::DR => "DR",
        }
    }

    /// The `(forward, reverse)` direction pair for this family.
    pub const fn directions(self) -> (Direction, Direction) {
        DIRECTION_PAIRS[self as usize]
    }

    /// The direction for a match, given whether the reversed word matched.
    pub const fn direction(self, reversed: bool) -> Direction {
        let (forward, reverse) = self.directions();
        if reversed {
            reverse
        } else {
            forward
        }
    }
}

impl fmt::Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one line: a family plus an anchor index along its edge.
///
/// Ordered by family first, then index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId {
    /// The line's shape.
    pub family: LineFamily,
    /// Anchor index; the valid range depends on the family.
    pub index: u32,
}

impl LineId {
    /// Construct a line identifier.
    pub const fn new(family: LineFamily, index: u32) -> Self {
        Self { family, index }
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family, self.index)
    }
}
