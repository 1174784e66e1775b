//! GET /api/graph, /api/conf, /api/autocomplete, /api/health

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use kgv_core::GraphStore;

use super::to_json;
use crate::error::AppError;

pub async fn get_graph(State(store): State<Arc<GraphStore>>) -> Result<Json<Value>, AppError> {
    to_json("graph", store.graph())
}

pub async fn get_config(State(store): State<Arc<GraphStore>>) -> Result<Json<Value>, AppError> {
    to_json("config", store.config())
}

pub async fn get_autocomplete(
    State(store): State<Arc<GraphStore>>,
) -> Result<Json<Value>, AppError> {
    to_json("autocomplete", &store.autocomplete())
}

pub async fn health(State(store): State<Arc<GraphStore>>) -> Json<Value> {
    let report = store.report();
    Json(json!({
        "status": "ok",
        "nodes": report.nodes,
        "edges": report.edges,
        "report": report,
    }))
}
