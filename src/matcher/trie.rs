//! Pattern trie construction.
//!
//! The trie is the mutable precursor of the automaton: [`Trie::insert`]
//! grows a prefix tree held in a flat arena, one node per distinct pattern
//! prefix. Failure links and merged outputs do not exist at this stage;
//! they are computed by [`compile`](crate::matcher::automaton::compile),
//! which consumes the trie and freezes it into an [`Automaton`].
//!
//! [`Automaton`]: crate::matcher::automaton::Automaton

use crate::matcher::MatcherError;
use crate::matcher::types::{NodeId, PatternId, ROOT};
use rustc_hash::FxHashMap;

/// A node in the uncompiled trie.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Outgoing transitions, one child per distinct byte
    pub children: FxHashMap<u8, NodeId>,
    /// The pattern whose insertion ends exactly at this node, if any
    pub terminal: Option<PatternId>,
}

/// Arena-backed prefix tree over byte patterns.
///
/// Every non-root node is reachable from the root by exactly one byte
/// sequence, and that sequence is a prefix of at least one inserted
/// pattern.
#[derive(Debug)]
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
    pub(crate) patterns: Vec<String>,
}

impl Trie {
    /// Create a trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            patterns: Vec::new(),
        }
    }

    /// Insert one pattern, creating a child node per missing prefix byte.
    ///
    /// Returns the id assigned to the pattern. Inserting an identical
    /// pattern again returns the original id: duplicates collapse onto
    /// the same terminal node and count once in reports.
    pub fn insert(&mut self, pattern: &str) -> Result<PatternId, MatcherError> {
        if pattern.is_empty() {
            return Err(MatcherError::EmptyPattern);
        }

        let mut node = ROOT;
        for &byte in pattern.as_bytes() {
            let existing = self.nodes[node as usize].children.get(&byte).copied();
            node = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(byte, child);
                    child
                }
            };
        }

        if let Some(id) = self.nodes[node as usize].terminal {
            return Ok(id);
        }
        let id = self.patterns.len() as PatternId;
        self.patterns.push(pattern.to_string());
        self.nodes[node as usize].terminal = Some(id);
        Ok(id)
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Patterns inserted so far, in id order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shares_prefixes() {
        let mut trie = Trie::new();
        trie.insert("he").unwrap();
        trie.insert("hers").unwrap();
        // root + h, e, r, s: "hers" reuses both nodes of "he"
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_insert_assigns_ids_in_order() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("he").unwrap(), 0);
        assert_eq!(trie.insert("she").unwrap(), 1);
        assert_eq!(trie.patterns(), &["he".to_string(), "she".to_string()]);
    }

    #[test]
    fn test_duplicate_pattern_collapses() {
        let mut trie = Trie::new();
        let first = trie.insert("aa").unwrap();
        let second = trie.insert("aa").unwrap();
        assert_eq!(first, second);
        assert_eq!(trie.patterns().len(), 1);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert(""), Err(MatcherError::EmptyPattern));
        // a failed insert leaves the trie untouched
        assert_eq!(trie.node_count(), 1);
        assert!(trie.patterns().is_empty());
    }

    #[test]
    fn test_pattern_prefix_of_another() {
        let mut trie = Trie::new();
        trie.insert("she").unwrap();
        trie.insert("sh").unwrap();
        // "sh" terminates on an interior node created by "she"
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.patterns().len(), 2);
    }
}
