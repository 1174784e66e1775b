//! Graph types for the viewer
//!
//! Nodes and edges are serialized in Cytoscape element form
//! (`{"data": {...}}`), which is what the browser client consumes.

use serde::{Deserialize, Serialize};

/// The cleaned graph: every node and edge that survived the pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

/// A graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub id: String,
    pub iri: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub weight: i64,
    /// Base color, assigned from the palette
    #[serde(default)]
    pub color: String,
    /// Brightened variant of `color` used for emphasis
    #[serde(default)]
    pub highlight_color: String,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }
}

impl From<NodeData> for Node {
    fn from(data: NodeData) -> Self {
        Self { data }
    }
}

/// A directed graph edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub data: EdgeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    pub id: String,
    pub iri: String,
    /// Source node id; empty when the export had no source
    #[serde(default)]
    pub source: String,
    /// Target node id; empty when the export had no target
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub weight: i64,
}

impl Edge {
    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    pub fn source(&self) -> &str {
        &self.data.source
    }

    pub fn target(&self) -> &str {
        &self.data.target
    }

    /// True if `node_id` is either endpoint.
    pub fn touches(&self, node_id: &str) -> bool {
        self.data.source == node_id || self.data.target == node_id
    }
}

impl From<EdgeData> for Edge {
    fn from(data: EdgeData) -> Self {
        Self { data }
    }
}

/// Descriptive record shown when hovering an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub iri: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Kind of graph element in an autocomplete listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Node,
    Edge,
}

/// One searchable entry for the client's search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteItem {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_wire_format() {
        let node = Node::from(NodeData {
            id: "n1".into(),
            iri: "http://example.org/ns#/Widget".into(),
            label: "Widget".into(),
            weight: 12,
            color: "#091849".into(),
            highlight_color: "#0f2878".into(),
        });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["data"]["id"], "n1");
        assert_eq!(json["data"]["highlightColor"], "#0f2878");
        assert!(json["data"].get("highlight_color").is_none());
    }

    #[test]
    fn test_autocomplete_kind_serializes_lowercase() {
        let item = AutocompleteItem {
            id: "e1".into(),
            label: "has Part".into(),
            kind: ElementKind::Edge,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "edge");
    }

    #[test]
    fn test_edge_touches() {
        let edge = Edge::from(EdgeData {
            id: "e1".into(),
            iri: "rel".into(),
            source: "a".into(),
            target: "b".into(),
            label: String::new(),
            weight: 1,
        });
        assert!(edge.touches("a"));
        assert!(edge.touches("b"));
        assert!(!edge.touches("c"));
    }
}
