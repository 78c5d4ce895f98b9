//! Move projection: from a placement to the cell the move ends on.

use crate::locator::{Placement, WordResult};
use crate::solver::Solution;
use gridseek_core::Cell;

/// The end cell of a word of `len` characters placed at `placement`.
///
/// Moves `len` steps from the start along the placement's direction:
/// `x` changes for east/west components, `y` for north/south ones. The
/// result is one step past the last letter and is not bounds-checked.
pub fn project(len: usize, placement: &Placement) -> Cell {
    placement
        .start
        .offset(placement.direction.delta(), len as i64)
}

/// A found word as a `from → to` move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// The target word.
    pub word: String,
    /// Start cell.
    pub from: Cell,
    /// Projected end cell.
    pub to: Cell,
}

impl Move {
    /// Project `word` from `placement`.
    pub fn new(word: impl Into<String>, placement: &Placement) -> Self {
        let word = word.into();
        let to = project(word.chars().count(), placement);
        Self {
            word,
            from: placement.start,
            to,
        }
    }

    /// The move for a solved word, or `None` if it was not found.
    pub fn from_solution(solution: &Solution) -> Option<Self> {
        match &solution.result {
            WordResult::Found(p) => Some(Self::new(solution.word.clone(), p)),
            WordResult::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::Direction;

    fn placement(x: i64, y: i64, direction: Direction) -> Placement {
        Placement {
            start: Cell::new(x, y),
            direction,
        }
    }

    #[test]
    fn east_adds_length_to_x() {
        assert_eq!(project(3, &placement(2, 5, Direction::E)), Cell::new(5, 5));
    }

    #[test]
    fn south_west_is_not_bounds_checked() {
        assert_eq!(project(3, &placement(2, 5, Direction::SW)), Cell::new(-1, 8));
    }

    #[test]
    fn each_direction_moves_both_axes_independently() {
        let start = placement(10, 10, Direction::E);
        let expected = [
            (Direction::E, (14, 10)),
            (Direction::W, (6, 10)),
            (Direction::N, (10, 6)),
            (Direction::S, (10, 14)),
            (Direction::NE, (14, 6)),
            (Direction::NW, (6, 6)),
            (Direction::SE, (14, 14)),
            (Direction::SW, (6, 14)),
        ];
        for (direction, (x, y)) in expected {
            let p = Placement { direction, ..start };
            assert_eq!(project(4, &p), Cell::new(x, y), "{direction}");
        }
    }

    #[test]
    fn move_counts_characters_not_bytes() {
        let m = Move::new("ÉTÉ", &placement(0, 0, Direction::S));
        assert_eq!(m.from, Cell::new(0, 0));
        assert_eq!(m.to, Cell::new(0, 3));
    }

    #[test]
    fn not_found_solution_has_no_move() {
        let s = Solution {
            word: "CAT".into(),
            result: WordResult::NotFound,
            end: None,
        };
        assert_eq!(Move::from_solution(&s), None);
    }
}
