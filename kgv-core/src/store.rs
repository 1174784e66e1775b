//! The frozen graph snapshot and its read-only queries
//!
//! `GraphStore::build` runs the whole pipeline and returns only once every
//! invariant holds; there is no way to observe a half-built store. After
//! that nothing mutates it, so it can be shared behind an `Arc` and read from
//! any number of request handlers without locking.

use std::path::Path;

use crate::config::{KgvConfig, ViewerConfig};
use crate::error::{KgvError, Result};
use crate::index::GraphIndex;
use crate::loader::{self, RawGraph};
use crate::pipeline::{Pipeline, PipelineReport};
use crate::tooltip::TooltipStore;
use crate::types::{AutocompleteItem, Edge, ElementKind, GraphData, Node, Tooltip};

#[derive(Debug, Clone)]
pub struct GraphStore {
    graph: GraphData,
    index: GraphIndex,
    tooltips: TooltipStore,
    viewer: ViewerConfig,
    report: PipelineReport,
}

impl GraphStore {
    /// Clean `raw` and index the result.
    pub fn build(raw: RawGraph, config: &KgvConfig) -> Result<Self> {
        let pipeline = Pipeline::new(config)?;
        let (graph, report) = pipeline.run(raw);
        let index = GraphIndex::build(&graph);

        tracing::info!(
            raw_nodes = report.raw_nodes,
            raw_edges = report.raw_edges,
            nodes = report.nodes,
            edges = report.edges,
            "Graph snapshot ready"
        );

        Ok(Self {
            graph,
            index,
            tooltips: TooltipStore::with_entries(&config.tooltips),
            viewer: config.viewer.clone(),
            report,
        })
    }

    /// Load the export at `path` and build the store from it.
    pub fn from_path(path: impl AsRef<Path>, config: &KgvConfig) -> Result<Self> {
        let raw = loader::load_from_path(path)?;
        Self::build(raw, config)
    }

    pub fn from_slice(bytes: &[u8], config: &KgvConfig) -> Result<Self> {
        let raw = loader::load_from_slice(bytes)?;
        Self::build(raw, config)
    }

    pub fn graph(&self) -> &GraphData {
        &self.graph
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.viewer
    }

    pub fn report(&self) -> &PipelineReport {
        &self.report
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index
            .node_position(id)
            .map(|pos| &self.graph.nodes[pos])
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.index
            .edge_position(id)
            .map(|pos| &self.graph.edges[pos])
    }

    /// Nodes for a comma-separated id list, in request order; unknown ids
    /// are skipped.
    pub fn nodes_by_ids(&self, list: &str) -> Vec<&Node> {
        split_ids(list).filter_map(|id| self.node(id)).collect()
    }

    /// Edges for a comma-separated id list, in request order; unknown ids
    /// are skipped.
    pub fn edges_by_ids(&self, list: &str) -> Vec<&Edge> {
        split_ids(list).filter_map(|id| self.edge(id)).collect()
    }

    /// Every edge with `node_id` as source or target.
    pub fn edges_of(&self, node_id: &str) -> Vec<&Edge> {
        self.index
            .incident_positions(node_id)
            .iter()
            .map(|&pos| &self.graph.edges[pos])
            .collect()
    }

    /// `[source, target]` of an edge.
    pub fn endpoints(&self, edge_id: &str) -> Result<[&Node; 2]> {
        let edge = self
            .edge(edge_id)
            .ok_or_else(|| KgvError::not_found("Edge"))?;
        let source = self
            .node(edge.source())
            .ok_or_else(|| KgvError::not_found("Source node"))?;
        let target = self
            .node(edge.target())
            .ok_or_else(|| KgvError::not_found("Target node"))?;
        Ok([source, target])
    }

    /// All nodes then all edges as `(id, label, kind)` entries.
    pub fn autocomplete(&self) -> Vec<AutocompleteItem> {
        let nodes = self.graph.nodes.iter().map(|n| AutocompleteItem {
            id: n.id().to_string(),
            label: n.label().to_string(),
            kind: ElementKind::Node,
        });
        let edges = self.graph.edges.iter().map(|e| AutocompleteItem {
            id: e.id().to_string(),
            label: e.label().to_string(),
            kind: ElementKind::Edge,
        });
        nodes.chain(edges).collect()
    }

    pub fn tooltip(&self, id: &str) -> &Tooltip {
        self.tooltips.get(id)
    }
}

fn split_ids(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|id| !id.is_empty())
}
