//! Label humanization: `wordOneWordTwo` becomes `word One Word Two`.

use crate::types::{EdgeData, NodeData};

/// Insert a space before every upper-case character except the first one,
/// unless whitespace already precedes it.
pub fn format_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + label.len() / 4);
    let mut prev: Option<char> = None;
    for c in label.chars() {
        if let Some(p) = prev {
            if c.is_uppercase() && !p.is_whitespace() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

pub fn format_labels(nodes: &mut [NodeData], edges: &mut [EdgeData]) {
    for node in nodes.iter_mut() {
        node.label = format_label(&node.label);
    }
    for edge in edges.iter_mut() {
        edge.label = format_label(&edge.label);
    }
}
