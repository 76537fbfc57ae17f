//! Per-pattern aggregation of the raw match stream.
//!
//! The scanner emits individual [`Match`]es; reports collapse them into
//! one entry per pattern with a count and the ordered occurrence spans.
//! Patterns with zero occurrences get no entry at all, and entries keep
//! first-discovery order, so serializing a report is deterministic.

use crate::matcher::automaton::Automaton;
use crate::matcher::types::{Match, PatternId};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// All occurrences of one pattern in one scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternHits {
    pub pattern: String,
    pub count: usize,
    /// (start, end) byte spans, inclusive, ascending by end
    pub occurrences: Vec<(usize, usize)>,
}

/// Aggregated result of one scan: one entry per matched pattern, in the
/// order patterns were first discovered in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchReport {
    entries: Vec<PatternHits>,
}

impl SearchReport {
    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of patterns with at least one occurrence.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total occurrences across all patterns.
    pub fn total_matches(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternHits> {
        self.entries.iter()
    }

    /// Look up one pattern's entry, if it matched at all.
    pub fn get(&self, pattern: &str) -> Option<&PatternHits> {
        self.entries.iter().find(|e| e.pattern == pattern)
    }
}

impl<'a> IntoIterator for &'a SearchReport {
    type Item = &'a PatternHits;
    type IntoIter = std::slice::Iter<'a, PatternHits>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Fold a match stream into a [`SearchReport`].
pub fn aggregate(automaton: &Automaton, matches: &[Match]) -> SearchReport {
    let mut slots: FxHashMap<PatternId, usize> = FxHashMap::default();
    let mut entries: Vec<PatternHits> = Vec::new();

    for m in matches {
        let slot = *slots.entry(m.pattern).or_insert_with(|| {
            entries.push(PatternHits {
                pattern: automaton.pattern(m.pattern).to_string(),
                count: 0,
                occurrences: Vec::new(),
            });
            entries.len() - 1
        });
        entries[slot].count += 1;
        entries[slot].occurrences.push((m.start, m.end));
    }

    SearchReport { entries }
}
