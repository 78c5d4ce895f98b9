//! Generalized suffix automaton over all lines of a grid.
//!
//! Every line is fed into one shared automaton, restarting from the root
//! at each line boundary, so a state's strings are exactly the substrings
//! that share an end-position set across all lines. Construction is the
//! standard online algorithm with the extra "transition already exists"
//! case needed when several strings share the automaton.
//!
//! Each state remembers the earliest place (in indexing order) where its
//! strings end. A pattern that walks to state `s` therefore occurs first
//! at `first[s].end + 1 - |pattern|` on line `first[s].line`.

use crate::index::{Hit, SubstringIndex};
use gridseek_core::LineId;
use gridseek_lines::LineMap;
use smallvec::SmallVec;

type StateId = u32;

const ROOT: StateId = 0;

/// End of an occurrence: index into the automaton's line table plus the
/// offset of the occurrence's last character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EndPos {
    line: u32,
    end: u32,
}

#[derive(Clone, Debug)]
struct State {
    /// Length of the longest string in this state.
    len: u32,
    /// Suffix link; `None` only for the root.
    link: Option<StateId>,
    /// Outgoing transitions, sorted by character.
    next: SmallVec<[(char, StateId); 4]>,
    /// Earliest end position in indexing order.
    first: EndPos,
}

impl State {
    fn new(len: u32, first: EndPos) -> Self {
        Self {
            len,
            link: None,
            next: SmallVec::new(),
            first,
        }
    }
}

/// A suffix automaton recognising every substring of every line.
///
/// Built once; `locate` runs in `O(|pattern| · log σ)` where `σ` is the
/// largest out-degree of any state. State ids, line indices and end
/// offsets are `u32`; [`Grid::MAX_CELLS`](gridseek_core::Grid::MAX_CELLS)
/// keeps every extracted grid within that range.
#[derive(Clone, Debug)]
pub struct SuffixAutomaton {
    states: Vec<State>,
    lines: Vec<LineId>,
}

impl SuffixAutomaton {
    /// Index every line of `map`, in `map` iteration order.
    pub fn build(map: &LineMap) -> Self {
        let total = map.total_chars();
        debug_assert!(2 * total < StateId::MAX as usize, "grid exceeds Grid::MAX_CELLS");
        let mut sam = Self {
            states: Vec::with_capacity(2 * total + 1),
            lines: Vec::with_capacity(map.len()),
        };
        sam.states.push(State::new(0, EndPos { line: 0, end: 0 }));
        for (id, text) in map.iter() {
            let line = sam.lines.len() as u32;
            sam.lines.push(id);
            let mut last = ROOT;
            for (end, &c) in text.iter().enumerate() {
                last = sam.extend(last, c, EndPos {
                    line,
                    end: end as u32,
                });
            }
        }
        log::debug!(
            "suffix automaton: {} states, {} transitions over {} lines ({} chars)",
            sam.state_count(),
            sam.transition_count(),
            sam.lines.len(),
            total
        );
        sam
    }

    /// Number of states, including the root.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of transitions.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.next.len()).sum()
    }

    fn transition(&self, state: StateId, c: char) -> Option<StateId> {
        let next = &self.states[state as usize].next;
        next.binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| next[i].1)
    }

    fn set_transition(&mut self, state: StateId, c: char, target: StateId) {
        let next = &mut self.states[state as usize].next;
        match next.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(i) => next[i].1 = target,
            Err(i) => next.insert(i, (c, target)),
        }
    }

    fn push(&mut self, state: State) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(state);
        id
    }

    fn len_of(&self, state: StateId) -> u32 {
        self.states[state as usize].len
    }

    /// Append `c` after the state `last` and return the new `last`.
    fn extend(&mut self, last: StateId, c: char, at: EndPos) -> StateId {
        if let Some(q) = self.transition(last, c) {
            // The extended string was already seen on an earlier line.
            if self.len_of(q) == self.len_of(last) + 1 {
                return q;
            }
            return self.split(last, c, q);
        }

        let cur = self.push(State::new(self.len_of(last) + 1, at));
        let mut p = Some(last);
        let link = loop {
            let Some(pp) = p else { break ROOT };
            match self.transition(pp, c) {
                Some(q) if self.len_of(q) == self.len_of(pp) + 1 => break q,
                Some(q) => break self.split(pp, c, q),
                None => {
                    self.set_transition(pp, c, cur);
                    p = self.states[pp as usize].link;
                }
            }
        };
        self.states[cur as usize].link = Some(link);
        cur
    }

    /// Clone `q` so that the `c`-transition from `p` lands on a state of
    /// length `len(p) + 1`, redirecting `p`'s suffix chain to the clone.
    fn split(&mut self, p: StateId, c: char, q: StateId) -> StateId {
        let src = &self.states[q as usize];
        let clone = State {
            len: self.len_of(p) + 1,
            link: src.link,
            next: src.next.clone(),
            first: src.first,
        };
        let clone = self.push(clone);
        let mut cursor = Some(p);
        while let Some(pp) = cursor {
            if self.transition(pp, c) != Some(q) {
                break;
            }
            self.set_transition(pp, c, clone);
            cursor = self.states[pp as usize].link;
        }
        self.states[q as usize].link = Some(clone);
        clone
    }
}

impl SubstringIndex for SuffixAutomaton {
    fn name(&self) -> &'static str {
        "suffix-automaton"
    }

    fn locate(&self, pattern: &[char]) -> Option<Hit> {
        if pattern.is_empty() {
            return None;
        }
        let mut state = ROOT;
        for &c in pattern {
            state = self.transition(state, c)?;
        }
        let first = self.states[state as usize].first;
        Some(Hit {
            line: self.lines[first.line as usize],
            offset: first.end as usize + 1 - pattern.len(),
        })
    }
}
