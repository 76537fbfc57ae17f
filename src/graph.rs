//! Automaton graph export.
//!
//! A read-only traversal over the compiled state arena producing a flat
//! node/edge listing for external renderers, plus a Graphviz DOT
//! rendering. Exporting never touches compiler or scanner state; the
//! automaton can keep serving scans while (or after) being exported.

use crate::matcher::{Automaton, NodeId, ROOT};
use serde::Serialize;
use std::fmt::Write;

/// One automaton state in the export.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub id: NodeId,
    /// Patterns recognized on reaching this state, merged output order
    pub outputs: Vec<String>,
}

/// Edge kind: a goto transition or a failure link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Goto,
    Failure,
}

/// One edge in the export. Goto edges carry their byte label.
#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Flat node/edge listing of a compiled automaton.
#[derive(Debug, Clone, Serialize)]
pub struct AutomatonGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Render a transition byte for humans: printable ASCII as-is, anything
/// else as hex.
fn byte_label(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        (byte as char).to_string()
    } else {
        format!("0x{byte:02x}")
    }
}

/// Walk the compiled arena and list every state, goto edge, and failure
/// link. Goto edges are sorted by (from, byte) so output is stable.
pub fn export(automaton: &Automaton) -> AutomatonGraph {
    let mut nodes = Vec::with_capacity(automaton.state_count());
    let mut edges = Vec::new();

    for id in 0..automaton.state_count() as NodeId {
        nodes.push(GraphNode {
            id,
            outputs: automaton
                .outputs(id)
                .iter()
                .map(|&p| automaton.pattern(p).to_string())
                .collect(),
        });

        let mut gotos: Vec<(u8, NodeId)> = automaton.transitions(id).collect();
        gotos.sort_unstable_by_key(|&(byte, _)| byte);
        for (byte, to) in gotos {
            edges.push(GraphEdge {
                from: id,
                to,
                kind: EdgeKind::Goto,
                label: Some(byte_label(byte)),
            });
        }

        if id != ROOT {
            edges.push(GraphEdge {
                from: id,
                to: automaton.failure(id),
                kind: EdgeKind::Failure,
                label: None,
            });
        }
    }

    AutomatonGraph { nodes, edges }
}

impl AutomatonGraph {
    /// Render as Graphviz DOT: goto edges solid, failure links dashed,
    /// output states double-circled and labeled with their patterns.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "digraph automaton {{");
        let _ = writeln!(out, "    rankdir=LR;");
        let _ = writeln!(out, "    node [shape=circle fontname=\"monospace\"];");

        for node in &self.nodes {
            if node.outputs.is_empty() {
                let _ = writeln!(out, "    {} [label=\"{}\"];", node.id, node.id);
            } else {
                let mut label = node.id.to_string();
                for pattern in &node.outputs {
                    label.push_str("\\n");
                    label.push_str(&dot_escape(pattern));
                }
                let _ = writeln!(
                    out,
                    "    {} [shape=doublecircle label=\"{}\"];",
                    node.id, label
                );
            }
        }

        for edge in &self.edges {
            match edge.kind {
                EdgeKind::Goto => {
                    let label = edge.label.as_deref().unwrap_or("");
                    let _ = writeln!(
                        out,
                        "    {} -> {} [label=\"{}\"];",
                        edge.from,
                        edge.to,
                        dot_escape(label)
                    );
                }
                EdgeKind::Failure => {
                    let _ = writeln!(
                        out,
                        "    {} -> {} [style=dashed color=gray];",
                        edge.from, edge.to
                    );
                }
            }
        }

        let _ = writeln!(out, "}}");
        out
    }
}

fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
