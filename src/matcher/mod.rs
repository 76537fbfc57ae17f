//! Multi-pattern matching engine.
//!
//! An Aho-Corasick automaton over bytes: insert a finite set of patterns,
//! compile once, then scan any number of texts in a single linear pass
//! each, reporting every occurrence of every pattern including fully
//! overlapping ones.
//!
//! ## Modules
//!
//! - [`trie`] - Arena-backed prefix tree the patterns are inserted into
//! - [`automaton`] - BFS compilation of failure links and merged outputs
//! - [`scanner`] - Single-pass scan emitting the raw match stream
//! - [`report`] - Aggregation into per-pattern counts and spans
//!
//! ## Typical use
//!
//! ```
//! use keyscan::matcher;
//!
//! let automaton = matcher::build(["he", "she", "his", "hers"]).unwrap();
//! let report = matcher::search(&automaton, b"ahishers");
//! assert_eq!(report.get("hers").unwrap().occurrences, [(4, 7)]);
//! ```

pub mod automaton;
pub mod report;
pub mod scanner;
pub mod trie;
pub mod types;

pub use automaton::{Automaton, compile};
pub use report::{PatternHits, SearchReport, aggregate};
pub use scanner::scan;
pub use trie::Trie;
pub use types::{Match, NodeId, PatternId, ROOT};

use std::fmt;

/// Errors surfaced while building an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherError {
    /// A supplied pattern had zero length. An empty pattern would match
    /// at every position and corrupt index-based reporting, so it is
    /// rejected up front.
    EmptyPattern,
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherError::EmptyPattern => write!(f, "patterns must be non-empty"),
        }
    }
}

impl std::error::Error for MatcherError {}

/// Build a compiled automaton from a pattern set.
///
/// An empty pattern *set* is valid and yields an automaton whose every
/// search returns an empty report; an empty pattern *string* is an error.
/// Patterns are matched byte-for-byte: apply any case folding before
/// calling this.
pub fn build<I, S>(patterns: I) -> Result<Automaton, MatcherError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new();
    for pattern in patterns {
        trie.insert(pattern.as_ref())?;
    }
    Ok(automaton::compile(trie))
}

/// Scan `text` and aggregate the match stream into a per-pattern report.
pub fn search(automaton: &Automaton, text: &[u8]) -> SearchReport {
    report::aggregate(automaton, &scanner::scan(automaton, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_empty_pattern() {
        assert_eq!(build(["he", ""]).unwrap_err(), MatcherError::EmptyPattern);
    }

    #[test]
    fn test_empty_pattern_set_is_valid() {
        let automaton = build(Vec::<&str>::new()).unwrap();
        assert!(search(&automaton, b"anything at all").is_empty());
    }

    #[test]
    fn test_build_then_search() {
        let automaton = build(["he", "she"]).unwrap();
        let report = search(&automaton, b"she said");
        assert_eq!(report.get("she").unwrap().count, 1);
        assert_eq!(report.get("he").unwrap().count, 1);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MatcherError::EmptyPattern.to_string(),
            "patterns must be non-empty"
        );
    }
}
