//! Id-keyed lookup over a finished graph
//!
//! Stores positions into `GraphData` rather than copies, so the graph stays
//! the single owner of every record.

use std::collections::HashMap;

use crate::types::GraphData;

#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    nodes: HashMap<String, usize>,
    edges: HashMap<String, usize>,
    /// node id -> positions of incident edges, in graph order
    incident: HashMap<String, Vec<usize>>,
}

impl GraphIndex {
    pub fn build(graph: &GraphData) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, n)| (n.id().to_string(), pos))
            .collect();

        let mut edges = HashMap::with_capacity(graph.edges.len());
        let mut incident: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, edge) in graph.edges.iter().enumerate() {
            edges.insert(edge.id().to_string(), pos);
            incident
                .entry(edge.source().to_string())
                .or_default()
                .push(pos);
            if edge.target() != edge.source() {
                incident
                    .entry(edge.target().to_string())
                    .or_default()
                    .push(pos);
            }
        }

        Self {
            nodes,
            edges,
            incident,
        }
    }

    pub fn node_position(&self, id: &str) -> Option<usize> {
        self.nodes.get(id).copied()
    }

    pub fn edge_position(&self, id: &str) -> Option<usize> {
        self.edges.get(id).copied()
    }

    /// Positions of edges touching `node_id`; empty for unknown ids.
    pub fn incident_positions(&self, node_id: &str) -> &[usize] {
        self.incident.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
