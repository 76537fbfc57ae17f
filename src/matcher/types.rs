use serde::Serialize;

/// Stable identifier of an automaton state (index into the state arena)
pub type NodeId = u32;

/// Identifier of an inserted pattern (index into the pattern table)
pub type PatternId = u32;

/// The root state. Always present, always id 0, fails to itself.
pub const ROOT: NodeId = 0;

/// A single pattern occurrence found during a scan.
///
/// Offsets are 0-based byte indices into the scanned text, inclusive on
/// both ends, so `start = end - pattern_len + 1`. The scanner emits
/// matches in non-decreasing order of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub pattern: PatternId,
    pub start: usize,
    pub end: usize,
}
