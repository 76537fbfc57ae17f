//! Automaton compilation and the compiled state arena.
//!
//! [`compile`] turns a [`Trie`] into a full Aho-Corasick automaton. A
//! breadth-first pass assigns every state a failure link (the state whose
//! path is the longest strict suffix of this state's path that is itself a
//! trie prefix) and a merged output list (own pattern plus everything
//! recognized along the failure chain).
//!
//! The strictly-increasing-depth processing order is what makes a single
//! forward pass sufficient: a state's failure target is always shallower,
//! so its output list is already final when the state is dequeued. No
//! fixpoint iteration is needed.

use crate::matcher::trie::Trie;
use crate::matcher::types::{NodeId, PatternId, ROOT};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// One compiled automaton state.
#[derive(Debug)]
struct State {
    /// Goto transitions: the trie's own byte-indexed children
    children: FxHashMap<u8, NodeId>,
    /// State of the longest strict path suffix that is a trie prefix
    fail: NodeId,
    /// Patterns recognized on reaching this state: own pattern first,
    /// then the failure target's list in its existing order
    output: Vec<PatternId>,
}

/// Immutable compiled matcher.
///
/// Built once per pattern set and searched against arbitrarily many
/// texts. Nothing mutates a compiled automaton, so concurrent scans may
/// share one instance freely.
#[derive(Debug)]
pub struct Automaton {
    states: Vec<State>,
    patterns: Vec<String>,
}

/// Compile a trie into an automaton, consuming it.
///
/// Depth-1 states (direct children of the root) fail to the root and seed
/// the queue. Every deeper state's failure link is found by chasing its
/// parent's failure chain until a state with a transition on the same
/// byte appears, falling back to the root.
pub fn compile(trie: Trie) -> Automaton {
    let Trie { nodes, patterns } = trie;

    let mut states: Vec<State> = nodes
        .into_iter()
        .map(|node| State {
            children: node.children,
            fail: ROOT,
            output: node.terminal.into_iter().collect(),
        })
        .collect();

    // Depth-1 states already carry fail = root; start the BFS from them.
    let mut queue: VecDeque<NodeId> = states[ROOT as usize].children.values().copied().collect();

    while let Some(state) = queue.pop_front() {
        let transitions: Vec<(u8, NodeId)> = states[state as usize]
            .children
            .iter()
            .map(|(&byte, &child)| (byte, child))
            .collect();

        for (byte, child) in transitions {
            let mut fallback = states[state as usize].fail;
            while fallback != ROOT && !states[fallback as usize].children.contains_key(&byte) {
                fallback = states[fallback as usize].fail;
            }
            let fail = states[fallback as usize]
                .children
                .get(&byte)
                .copied()
                .unwrap_or(ROOT);

            states[child as usize].fail = fail;
            // The fail target is strictly shallower, so its list is final.
            let inherited = states[fail as usize].output.clone();
            states[child as usize].output.extend(inherited);
            queue.push_back(child);
        }
    }

    Automaton { states, patterns }
}

impl Automaton {
    /// All patterns, in id order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// The pattern string behind an id.
    pub fn pattern(&self, id: PatternId) -> &str {
        &self.patterns[id as usize]
    }

    /// Number of distinct patterns compiled in.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Advance from `state` on `byte`: chase failure links while no goto
    /// transition on `byte` exists, then take it, or stay at the root.
    pub fn next_state(&self, mut state: NodeId, byte: u8) -> NodeId {
        loop {
            if let Some(&next) = self.states[state as usize].children.get(&byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state as usize].fail;
        }
    }

    /// Patterns recognized on reaching `state`, directly or via its
    /// failure chain.
    pub fn outputs(&self, state: NodeId) -> &[PatternId] {
        &self.states[state as usize].output
    }

    /// Failure link of `state`. The root fails to itself.
    pub fn failure(&self, state: NodeId) -> NodeId {
        self.states[state as usize].fail
    }

    /// Goto transitions out of `state`, in arbitrary order.
    pub fn transitions(&self, state: NodeId) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.states[state as usize]
            .children
            .iter()
            .map(|(&byte, &child)| (byte, child))
    }
}
