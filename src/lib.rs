//! # keyscan - Multi-Pattern Keyword Scanner
//!
//! keyscan finds every occurrence of every pattern in a set with a single
//! pass over the input, using an Aho-Corasick automaton: build the
//! matcher once per pattern set, then scan any number of texts in time
//! linear in the text alone, overlapping and nested occurrences included.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`matcher`] - The engine: trie construction, automaton compilation,
//!   scanning, and per-pattern report aggregation
//! - [`graph`] - Read-only node/edge export of a compiled automaton
//!   (Graphviz DOT or JSON)
//! - [`input`] - Structured `{text, patterns}` JSON records
//! - [`files`] - Ignore-aware file collection and memory-mapped reads
//! - [`output`] - Terminal report rendering
//!
//! ## Quick Start
//!
//! ```
//! use keyscan::matcher;
//!
//! let automaton = matcher::build(["he", "she", "his", "hers"]).unwrap();
//!
//! // One automaton, any number of texts.
//! let report = matcher::search(&automaton, b"ahishers");
//! for hits in &report {
//!     println!("{}: {} at {:?}", hits.pattern, hits.count, hits.occurrences);
//! }
//! assert_eq!(report.get("she").unwrap().occurrences, [(3, 5)]);
//! ```
//!
//! ## Performance
//!
//! Compilation is a single breadth-first pass over the trie; scanning is
//! O(text length + matches reported) regardless of how many patterns were
//! compiled in. A compiled [`matcher::Automaton`] is immutable and
//! `Sync`, so parallel scans (the CLI runs one per file via rayon) share
//! it without locking.

pub mod files;
pub mod graph;
pub mod input;
pub mod matcher;
pub mod output;
