//! Raw graph document loading
//!
//! The export is a JSON document with top-level `nodes` and `edges`
//! collections. Records are accepted either wrapped in a Cytoscape
//! `{"data": {...}}` envelope or flat.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{KgvError, Result};
use crate::types::{EdgeData, NodeData};

/// Records exactly as they appear in the export, before any cleaning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGraph {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
}

#[derive(Deserialize)]
struct RawDocument {
    nodes: Vec<RawRecord<NodeData>>,
    edges: Vec<RawRecord<EdgeData>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord<T> {
    Wrapped { data: T },
    Flat(T),
}

impl<T> RawRecord<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Flat(data) => data,
        }
    }
}

impl From<RawDocument> for RawGraph {
    fn from(doc: RawDocument) -> Self {
        Self {
            nodes: doc.nodes.into_iter().map(RawRecord::into_inner).collect(),
            edges: doc.edges.into_iter().map(RawRecord::into_inner).collect(),
        }
    }
}

pub fn load_from_slice(bytes: &[u8]) -> Result<RawGraph> {
    let doc: RawDocument = serde_json::from_slice(bytes).map_err(KgvError::Parse)?;
    Ok(doc.into())
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<RawGraph> {
    let doc: RawDocument = serde_json::from_reader(reader).map_err(KgvError::Parse)?;
    Ok(doc.into())
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraph> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| KgvError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let graph = load_from_reader(std::io::BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Loaded raw graph document"
    );
    Ok(graph)
}
