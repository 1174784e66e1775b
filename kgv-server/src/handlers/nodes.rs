//! Node lookups.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use kgv_core::{GraphStore, KgvError};

use super::to_json;
use crate::error::AppError;

/// GET /api/node/:id
pub async fn get_node(
    State(store): State<Arc<GraphStore>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let node = store
        .node(&id)
        .ok_or_else(|| KgvError::not_found("Node"))?;
    to_json("node", node)
}

/// GET /api/nodes/:list
pub async fn get_node_list(
    State(store): State<Arc<GraphStore>>,
    Path(list): Path<String>,
) -> Result<Json<Value>, AppError> {
    to_json("node list", &store.nodes_by_ids(&list))
}

/// GET /api/node/:id/edges
pub async fn get_node_edges(
    State(store): State<Arc<GraphStore>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    to_json("incident edges", &store.edges_of(&id))
}
