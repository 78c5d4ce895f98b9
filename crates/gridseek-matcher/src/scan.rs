//! Brute-force reference index.

use crate::index::{Hit, SubstringIndex};
use gridseek_core::LineId;
use gridseek_lines::LineMap;

/// Scans every line, in order, for each query.
///
/// `O(total text × |pattern|)` per lookup. Produces the same hits as
/// [`SuffixAutomaton`](crate::SuffixAutomaton), so it doubles as a test
/// oracle.
#[derive(Clone, Debug)]
pub struct LinearScan {
    lines: Vec<(LineId, Vec<char>)>,
}

impl LinearScan {
    /// Copy every line of `map`, preserving its order.
    pub fn build(map: &LineMap) -> Self {
        Self {
            lines: map.iter().map(|(id, text)| (id, text.to_vec())).collect(),
        }
    }
}

impl SubstringIndex for LinearScan {
    fn name(&self) -> &'static str {
        "linear-scan"
    }

    fn locate(&self, pattern: &[char]) -> Option<Hit> {
        if pattern.is_empty() {
            return None;
        }
        self.lines.iter().find_map(|(line, text)| {
            text.windows(pattern.len())
                .position(|w| w == pattern)
                .map(|offset| Hit {
                    line: *line,
                    offset,
                })
        })
    }
}
