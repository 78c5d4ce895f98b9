//! The eight compass directions a word may be read in.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A compass direction on the grid.
///
/// The grid origin is the top-left cell; `x` grows eastward (along a
/// row) and `y` grows southward (down a column). North therefore means
/// decreasing `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Rightward along a row.
    E,
    /// Leftward along a row.
    W,
    /// Upward along a column.
    N,
    /// Downward along a column.
    S,
    /// Up and to the right.
    NE,
    /// Up and to the left.
    NW,
    /// Down and to the right.
    SE,
    /// Down and to the left.
    SW,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::E,
        Direction::W,
        Direction::N,
        Direction::S,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// The compass label, e.g. `"NE"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::W => "W",
            Self::N => "N",
            Self::S => "S",
            Self::NE => "NE",
            Self::NW => "NW",
            Self::SE => "SE",
            Self::SW => "SW",
        }
    }

    /// Unit step `(dx, dy)` for one cell in this direction.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::E => (1, 0),
            Self::W => (-1, 0),
            Self::N => (0, -1),
            Self::S => (0, 1),
            Self::NE => (1, -1),
            Self::NW => (-1, -1),
            Self::SE => (1, 1),
            Self::SW => (-1, 1),
        }
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Self::E => Self::W,
            Self::W => Self::E,
            Self::N => Self::S,
            Self::S => Self::N,
            Self::NE => Self::SW,
            Self::NW => Self::SE,
            Self::SE => Self::NW,
            Self::SW => Self::NE,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the eight compass labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.input)
    }
}

impl Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            assert_ne!(d.reverse(), d);
        }
    }

    #[test]
    fn reverse_negates_delta() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            assert_eq!(d.reverse().delta(), (-dx, -dy), "{d}");
        }
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for d in Direction::ALL {
            assert_eq!(d.label().parse::<Direction>(), Ok(d));
        }
        assert_eq!("sw".parse::<Direction>(), Ok(Direction::SW));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "NNE".parse::<Direction>().unwrap_err();
        assert_eq!(err.input, "NNE");
        assert!(err.to_string().contains("NNE"));
    }

    #[test]
    fn north_points_toward_row_zero() {
        assert_eq!(Direction::N.delta(), (0, -1));
        assert_eq!(Direction::SE.delta(), (1, 1));
    }
}
