//! The cleaning pipeline
//!
//! Turns a raw export into a renderable graph. Stage order matters and is
//! fixed here:
//!
//! ```text
//! RawGraph ─► dedup ─► weights ─► filter ─► labels ─► colors ─► GraphData
//! ```
//!
//! Placeholder detection runs on raw labels, so labels are only humanized
//! after filtering. Colors are assigned last, over the id-sorted survivors,
//! so the palette cycle is reproducible across runs.

pub mod colors;
pub mod dedup;
pub mod filter;
pub mod labels;
pub mod weights;

use serde::Serialize;

use crate::config::KgvConfig;
use crate::error::Result;
use crate::loader::RawGraph;
use crate::types::{Edge, GraphData, Node};

use colors::Rgb;

/// Counts collected while cleaning, for logging and the health endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub raw_nodes: usize,
    pub raw_edges: usize,
    pub merged_nodes: usize,
    pub merged_edges: usize,
    pub rewired_endpoints: usize,
    pub placeholder_nodes: usize,
    pub placeholder_edges: usize,
    pub disconnected_nodes: usize,
    pub dangling_edges: usize,
    pub nodes: usize,
    pub edges: usize,
}

pub struct Pipeline<'a> {
    config: &'a KgvConfig,
    palette: Vec<Rgb>,
}

impl<'a> Pipeline<'a> {
    /// Validate `config` and prepare the palette.
    pub fn new(config: &'a KgvConfig) -> Result<Self> {
        config.validate()?;
        let palette = config
            .pipeline
            .palette
            .iter()
            .map(|hex| Rgb::from_hex(hex))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { config, palette })
    }

    pub fn run(&self, raw: RawGraph) -> (GraphData, PipelineReport) {
        let mut report = PipelineReport {
            raw_nodes: raw.nodes.len(),
            raw_edges: raw.edges.len(),
            ..Default::default()
        };

        // Nodes first: merged-away ids must be rewired before edges are grouped.
        let squashed_nodes = dedup::squash_nodes(raw.nodes);
        let mut raw_edges = raw.edges;
        report.rewired_endpoints =
            dedup::rewire_edges(&mut raw_edges, &squashed_nodes.alias_map());
        let mut nodes = squashed_nodes.records;
        let mut edges = dedup::squash_edges(raw_edges).records;
        report.merged_nodes = report.raw_nodes - nodes.len();
        report.merged_edges = report.raw_edges - edges.len();
        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            merged_nodes = report.merged_nodes,
            merged_edges = report.merged_edges,
            rewired = report.rewired_endpoints,
            "Deduplicated namespace variants"
        );

        let bounds = &self.config.viewer;
        weights::normalize_nodes(&mut nodes, bounds);
        weights::normalize_edges(&mut edges, bounds);

        let placeholders = filter::remove_placeholders(
            &mut nodes,
            &mut edges,
            &self.config.pipeline.placeholder_label,
        );
        report.placeholder_nodes = placeholders.nodes;
        report.placeholder_edges = placeholders.edges;

        let pruned = filter::prune_disconnected(&mut nodes, &mut edges);
        report.disconnected_nodes = pruned.nodes;
        report.dangling_edges = pruned.edges;
        tracing::debug!(
            placeholders = placeholders.nodes,
            disconnected = pruned.nodes,
            dropped_edges = placeholders.edges + pruned.edges,
            rounds = pruned.rounds,
            "Filtered graph structure"
        );

        labels::format_labels(&mut nodes, &mut edges);
        colors::assign_colors(
            &mut nodes,
            &self.palette,
            self.config.pipeline.highlight_fraction,
        );

        report.nodes = nodes.len();
        report.edges = edges.len();

        let graph = GraphData::new(
            nodes.into_iter().map(Node::from).collect(),
            edges.into_iter().map(Edge::from).collect(),
        );
        (graph, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeData, NodeData};
    use std::collections::HashSet;

    fn node(id: &str, iri: &str, label: &str, weight: i64) -> NodeData {
        NodeData {
            id: id.into(),
            iri: iri.into(),
            label: label.into(),
            weight,
            color: String::new(),
            highlight_color: String::new(),
        }
    }

    fn edge(id: &str, iri: &str, source: &str, target: &str, weight: i64) -> EdgeData {
        EdgeData {
            id: id.into(),
            iri: iri.into(),
            source: source.into(),
            target: target.into(),
            label: "relatesTo".into(),
            weight,
        }
    }

    fn run(raw: RawGraph) -> (GraphData, PipelineReport) {
        let config = KgvConfig::default();
        Pipeline::new(&config).unwrap().run(raw)
    }

    fn degree(graph: &GraphData, id: &str) -> usize {
        graph.edges.iter().filter(|e| e.touches(id)).count()
    }

    #[test]
    fn test_widget_scenario() {
        let raw = RawGraph {
            nodes: vec![
                node("w", "http://a.org/Widget", "Widget", 3),
                node("w", "http://b.org/Widget", "Widget", 5),
                node("g", "http://a.org/Gizmo", "Gizmo", 64),
            ],
            edges: vec![edge("e1", "http://a.org/partOf", "w", "g", 1)],
        };
        let (graph, report) = run(raw);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        let widget = graph.nodes.iter().find(|n| n.id() == "w").unwrap();
        // log2(8) * 5 = 15
        assert_eq!(widget.data.weight, 15);
        assert!(graph.nodes.iter().all(|n| degree(&graph, n.id()) > 0));
        assert_eq!(report.merged_nodes, 1);
        assert_eq!(report.nodes, 2);
    }

    #[test]
    fn test_widget_scenario_with_distinct_ids_rewires_edge() {
        let raw = RawGraph {
            nodes: vec![
                node("a:Widget", "http://a.org/Widget", "Widget", 3),
                node("b:Widget", "http://b.org/Widget", "Widget", 5),
                node("g", "http://a.org/Gizmo", "Gizmo", 1),
            ],
            edges: vec![edge("e1", "http://a.org/partOf", "a:Widget", "g", 1)],
        };
        let (graph, report) = run(raw);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source(), "b:Widget");
        assert_eq!(report.rewired_endpoints, 1);
    }

    #[test]
    fn test_placeholder_scenario() {
        let raw = RawGraph {
            nodes: vec![
                node("p", "x/Thing", "IsupEntity", 4),
                node("lonely", "x/Lonely", "Lonely", 4),
                node("a", "x/A", "A", 4),
                node("b", "x/B", "B", 4),
            ],
            edges: vec![
                edge("e1", "x/rel", "p", "lonely", 1),
                edge("e2", "x/rel", "a", "b", 1),
            ],
        };
        let (graph, report) = run(raw);

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(graph.edges.iter().all(|e| e.id() != "e1"));
        assert_eq!(report.placeholder_nodes, 1);
        assert_eq!(report.placeholder_edges, 1);
        assert_eq!(report.disconnected_nodes, 1);
    }

    #[test]
    fn test_output_invariants() {
        let raw = RawGraph {
            nodes: vec![
                node("c", "x/C", "someLabel", 1),
                node("a", "x/A", "otherLabel", 1_000_000),
                node("b", "x/B", "IsupEntity", 2),
                node("d", "x/D", "D", 0),
            ],
            edges: vec![
                edge("e1", "x/r", "a", "c", 7),
                edge("e2", "x/r", "a", "b", 100),
                edge("e3", "x/r", "c", "ghost", 3),
                edge("e4", "x/r", "", "a", 3),
            ],
        };
        let config = KgvConfig::default();
        let (graph, _) = Pipeline::new(&config).unwrap().run(raw);

        let present: HashSet<&str> = graph.nodes.iter().map(|n| n.id()).collect();
        for e in &graph.edges {
            assert!(present.contains(e.source()) && present.contains(e.target()));
            let w = e.data.weight;
            assert!(config.viewer.min_edge_weight <= w && w <= config.viewer.max_edge_weight);
        }
        for n in &graph.nodes {
            assert!(degree(&graph, n.id()) > 0);
            let w = n.data.weight;
            assert!(config.viewer.min_node_weight <= w && w <= config.viewer.max_node_weight);
            assert!(n.data.color.starts_with('#'));
            assert!(n.data.highlight_color.starts_with('#'));
        }
        assert!(graph.edges.iter().all(|e| e.label() == "relates To"));
    }

    #[test]
    fn test_colors_follow_id_order() {
        let raw = RawGraph {
            nodes: vec![
                node("b", "x/B", "B", 1),
                node("a", "x/A", "A", 1),
            ],
            edges: vec![edge("e1", "x/r", "a", "b", 1)],
        };
        let (graph, _) = run(raw);
        let palette = &KgvConfig::default().pipeline.palette;
        assert_eq!(graph.nodes[0].id(), "a");
        assert_eq!(graph.nodes[0].data.color, palette[0]);
        assert_eq!(graph.nodes[1].data.color, palette[1]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = KgvConfig::default();
        config.pipeline.palette = vec!["nope".into()];
        assert!(Pipeline::new(&config).is_err());
    }
}
