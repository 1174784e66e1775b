//! Edge lookups.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use kgv_core::{GraphStore, KgvError};

use super::to_json;
use crate::error::AppError;

/// GET /api/edge/:id
pub async fn get_edge(
    State(store): State<Arc<GraphStore>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let edge = store
        .edge(&id)
        .ok_or_else(|| KgvError::not_found("Edge"))?;
    to_json("edge", edge)
}

/// GET /api/edges/:list
pub async fn get_edge_list(
    State(store): State<Arc<GraphStore>>,
    Path(list): Path<String>,
) -> Result<Json<Value>, AppError> {
    to_json("edge list", &store.edges_by_ids(&list))
}

/// GET /api/edge/:id/nodes, answered as `[source, target]`
pub async fn get_edge_endpoints(
    State(store): State<Arc<GraphStore>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let endpoints = store.endpoints(&id)?;
    to_json("edge endpoints", &endpoints)
}
