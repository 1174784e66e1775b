//! Structural filtering
//!
//! Two passes, in order: drop placeholder nodes together with every edge that
//! touches them, then prune until every edge joins two surviving nodes and
//! every node has at least one edge.

use std::collections::HashSet;

use crate::types::{EdgeData, NodeData};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderRemoval {
    pub nodes: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectivityPruning {
    pub nodes: usize,
    pub edges: usize,
    pub rounds: usize,
}

/// Remove nodes labeled `sentinel`, edges touching them, and edges with an
/// empty endpoint.
pub fn remove_placeholders(
    nodes: &mut Vec<NodeData>,
    edges: &mut Vec<EdgeData>,
    sentinel: &str,
) -> PlaceholderRemoval {
    let removed: HashSet<String> = nodes
        .iter()
        .filter(|n| n.label == sentinel)
        .map(|n| n.id.clone())
        .collect();

    let nodes_before = nodes.len();
    nodes.retain(|n| !removed.contains(&n.id));

    let edges_before = edges.len();
    edges.retain(|e| {
        if e.source.is_empty() || e.target.is_empty() {
            tracing::debug!(edge = %e.id, "Dropping edge with missing endpoint");
            return false;
        }
        !removed.contains(&e.source) && !removed.contains(&e.target)
    });

    PlaceholderRemoval {
        nodes: nodes_before - nodes.len(),
        edges: edges_before - edges.len(),
    }
}

/// Drop nodes no edge references and edges whose endpoints are gone,
/// repeating until neither changes.
pub fn prune_disconnected(
    nodes: &mut Vec<NodeData>,
    edges: &mut Vec<EdgeData>,
) -> ConnectivityPruning {
    let mut stats = ConnectivityPruning::default();

    loop {
        stats.rounds += 1;

        let connected: HashSet<&str> = edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .collect();
        let nodes_before = nodes.len();
        nodes.retain(|n| connected.contains(n.id.as_str()));
        let dropped_nodes = nodes_before - nodes.len();

        let present: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let edges_before = edges.len();
        edges.retain(|e| {
            present.contains(e.source.as_str()) && present.contains(e.target.as_str())
        });
        let dropped_edges = edges_before - edges.len();

        stats.nodes += dropped_nodes;
        stats.edges += dropped_edges;

        if dropped_edges == 0 {
            // No edge vanished, so every remaining node is still referenced.
            return stats;
        }
    }
}
