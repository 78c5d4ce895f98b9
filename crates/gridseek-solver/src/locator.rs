//! Per-word location: forward lookup, reversed lookup, inverse mapping.

use gridseek_core::{Cell, Direction};
use gridseek_lines::LineMap;
use gridseek_matcher::{Hit, SubstringIndex};
use std::fmt;

/// Where a word starts and which way it reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Cell holding the word's first letter.
    pub start: Cell,
    /// Direction from the first letter toward the last.
    pub direction: Direction,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.direction)
    }
}

/// Outcome of locating one word.
///
/// `NotFound` is an ordinary result, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordResult {
    /// The word does not occur in any of the eight directions.
    NotFound,
    /// The word occurs with this placement.
    Found(Placement),
}

impl WordResult {
    /// The placement, if found.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    /// `true` for [`WordResult::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Resolves words against a line map and an index built over it.
///
/// Holds only shared references, so one locator can be used from many
/// threads at once.
#[derive(Clone, Copy)]
pub struct WordLocator<'a> {
    lines: &'a LineMap,
    index: &'a dyn SubstringIndex,
}

impl<'a> WordLocator<'a> {
    /// Pair a line map with an index built from that same map.
    pub fn new(lines: &'a LineMap, index: &'a dyn SubstringIndex) -> Self {
        Self { lines, index }
    }

    /// Locate `word`, trying it as written and then reversed.
    ///
    /// A reversed hit means the word reads against the line's step
    /// order: its first letter sits at the *end* of the matched run and
    /// the direction is the family's reverse label.
    pub fn locate_word(&self, word: &[char]) -> WordResult {
        if word.is_empty() {
            return WordResult::NotFound;
        }
        let (hit, reversed) = match self.index.locate(word) {
            Some(hit) => (hit, false),
            None => {
                let reversed: Vec<char> = word.iter().rev().copied().collect();
                match self.index.locate(&reversed) {
                    Some(hit) => (hit, true),
                    None => return WordResult::NotFound,
                }
            }
        };
        self.placement(hit, word.len(), reversed)
    }

    /// [`locate_word`](Self::locate_word) for a string.
    pub fn locate_str(&self, word: &str) -> WordResult {
        let chars: Vec<char> = word.chars().collect();
        self.locate_word(&chars)
    }

    fn placement(&self, hit: Hit, len: usize, reversed: bool) -> WordResult {
        let offset = if reversed {
            hit.offset + len - 1
        } else {
            hit.offset
        };
        let Some(start) = self.lines.cell_at(hit.line, offset) else {
            log::warn!(
                "{} reported {} offset {offset}, which is not on the line",
                self.index.name(),
                hit.line
            );
            return WordResult::NotFound;
        };
        WordResult::Found(Placement {
            start,
            direction: hit.line.family.direction(reversed),
        })
    }
}

impl fmt::Debug for WordLocator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordLocator")
            .field("lines", &self.lines.len())
            .field("index", &self.index.name())
            .finish()
    }
}
