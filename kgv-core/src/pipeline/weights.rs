//! Weight rescaling for visual encoding
//!
//! Node weights drive rendered size and are log-scaled; edge weights drive
//! line thickness and are scaled linearly against the heaviest edge.

use crate::config::ViewerConfig;
use crate::types::{EdgeData, NodeData};

const NODE_LOG_SCALE: f64 = 5.0;
const EDGE_LINEAR_SCALE: i64 = 3;

/// `clamp(log2(raw) * 5, min, max)`, truncated. Non-positive weights have no
/// logarithm and map to `min`.
pub fn node_weight(raw: i64, min: i64, max: i64) -> i64 {
    if raw <= 0 {
        return min;
    }
    let scaled = (raw as f64).log2() * NODE_LOG_SCALE;
    scaled.clamp(min as f64, max as f64) as i64
}

/// `clamp((raw / max_raw) * 3, min, max)` with integer division, so any
/// edge lighter than the heaviest one scales to 0 before clamping.
pub fn edge_weight(raw: i64, max_raw: i64, min: i64, max: i64) -> i64 {
    let ratio = if max_raw > 0 { raw / max_raw } else { 0 };
    ratio.saturating_mul(EDGE_LINEAR_SCALE).clamp(min, max)
}

pub fn normalize_nodes(nodes: &mut [NodeData], bounds: &ViewerConfig) {
    for node in nodes.iter_mut() {
        node.weight = node_weight(node.weight, bounds.min_node_weight, bounds.max_node_weight);
    }
}

pub fn normalize_edges(edges: &mut [EdgeData], bounds: &ViewerConfig) {
    let max_raw = edges.iter().map(|e| e.weight).max().unwrap_or(0);
    for edge in edges.iter_mut() {
        edge.weight = edge_weight(
            edge.weight,
            max_raw,
            bounds.min_edge_weight,
            bounds.max_edge_weight,
        );
    }
}
