//! GET /api/tooltip/:id. Always answers, falling back to the default record.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use kgv_core::GraphStore;

use super::to_json;
use crate::error::AppError;

pub async fn get_tooltip(
    State(store): State<Arc<GraphStore>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    to_json("tooltip", store.tooltip(&id))
}
