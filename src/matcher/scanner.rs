//! Linear scan over input bytes.
//!
//! One pass, left to right: advance the automaton on each byte (chasing
//! failure links when the current state has no goto transition) and emit a
//! match for every pattern in the new state's merged output list. Failure
//! chasing is amortized by the usual argument: depth increases by at most
//! one per scanned byte and every chase step strictly decreases it, so the
//! whole scan is O(text len + matches emitted).
//!
//! The scanner never mutates the automaton; each scan owns its traversal
//! state, so any number of scans may run concurrently over one shared
//! [`Automaton`].

use crate::matcher::automaton::Automaton;
use crate::matcher::types::{Match, ROOT};

/// Scan `text` once, emitting every occurrence of every pattern in
/// non-decreasing order of end offset. Overlapping and nested
/// occurrences are all reported.
pub fn scan(automaton: &Automaton, text: &[u8]) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut state = ROOT;

    for (end, &byte) in text.iter().enumerate() {
        state = automaton.next_state(state, byte);
        for &pattern in automaton.outputs(state) {
            let len = automaton.pattern(pattern).len();
            matches.push(Match {
                pattern,
                start: end + 1 - len,
                end,
            });
        }
    }

    matches
}
