//! The [`SubstringIndex`] trait and backend selection.

use crate::automaton::SuffixAutomaton;
use crate::scan::LinearScan;
use gridseek_core::LineId;
use gridseek_lines::LineMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Where a pattern was found: a line and the 0-based offset of the
/// pattern's first character within that line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hit {
    /// The line containing the pattern.
    pub line: LineId,
    /// Offset of the pattern's first character.
    pub offset: usize,
}

/// A read-only substring index over a fixed set of lines.
///
/// # Contract
///
/// - `locate` returns `Some` iff some indexed line contains `pattern` as
///   a contiguous run of characters.
/// - The empty pattern never matches.
/// - Results are deterministic: the same index and pattern always
///   yield the same hit.
///
/// Implementations are `Send + Sync` so a single index can serve
/// lookups from several worker threads.
pub trait SubstringIndex: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Find `pattern` in some indexed line.
    fn locate(&self, pattern: &[char]) -> Option<Hit>;
}

/// Selects which [`SubstringIndex`] backend to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatcherKind {
    /// [`SuffixAutomaton`].
    #[default]
    SuffixAutomaton,
    /// [`LinearScan`].
    LinearScan,
}

impl MatcherKind {
    /// Build the selected index over `lines`.
    pub fn build(self, lines: &LineMap) -> Box<dyn SubstringIndex> {
        match self {
            Self::SuffixAutomaton => Box::new(SuffixAutomaton::build(lines)),
            Self::LinearScan => Box::new(LinearScan::build(lines)),
        }
    }

    /// Name as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuffixAutomaton => "automaton",
            Self::LinearScan => "scan",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`MatcherKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMatcherKindError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseMatcherKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown matcher '{}' (expected 'automaton' or 'scan')",
            self.input
        )
    }
}

impl Error for ParseMatcherKindError {}

impl FromStr for MatcherKind {
    type Err = ParseMatcherKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "automaton" | "suffix-automaton" | "sam" => Ok(Self::SuffixAutomaton),
            "scan" | "linear" | "linear-scan" => Ok(Self::LinearScan),
            _ => Err(ParseMatcherKindError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::{Grid, LineFamily};

    #[test]
    fn kind_parses_names_and_aliases() {
        assert_eq!("automaton".parse::<MatcherKind>(), Ok(MatcherKind::SuffixAutomaton));
        assert_eq!("SAM".parse::<MatcherKind>(), Ok(MatcherKind::SuffixAutomaton));
        assert_eq!("scan".parse::<MatcherKind>(), Ok(MatcherKind::LinearScan));
        let err = "trie".parse::<MatcherKind>().unwrap_err();
        assert!(err.to_string().contains("trie"));
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in [MatcherKind::SuffixAutomaton, MatcherKind::LinearScan] {
            assert_eq!(kind.to_string().parse::<MatcherKind>(), Ok(kind));
        }
    }

    #[test]
    fn built_backends_report_their_names() {
        let g = Grid::from_rows(["AB", "CD"]).unwrap();
        let lines = LineMap::extract(&g);
        let sam = MatcherKind::SuffixAutomaton.build(&lines);
        let scan = MatcherKind::LinearScan.build(&lines);
        assert_eq!(sam.name(), "suffix-automaton");
        assert_eq!(scan.name(), "linear-scan");
        let want = Some(Hit {
            line: LineId::new(LineFamily::V, 1),
            offset: 0,
        });
        assert_eq!(sam.locate(&['B', 'D']), want);
        assert_eq!(scan.locate(&['B', 'D']), want);
    }
}
