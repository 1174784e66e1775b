//! Router construction for the KGV server.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use kgv_core::GraphStore;

use crate::handlers;

/// Build the full axum router over a finished store.
///
/// When `static_dir` is set, unmatched paths are served from it.
pub fn build_router(store: Arc<GraphStore>, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/api/health", get(handlers::graph::health))
        .route("/api/graph", get(handlers::graph::get_graph))
        .route("/api/conf", get(handlers::graph::get_config))
        .route("/api/autocomplete", get(handlers::graph::get_autocomplete))
        .route("/api/tooltip/:id", get(handlers::tooltip::get_tooltip))
        // Nodes
        .route("/api/node/:id", get(handlers::nodes::get_node))
        .route("/api/node/:id/edges", get(handlers::nodes::get_node_edges))
        .route("/api/nodes/:list", get(handlers::nodes::get_node_list))
        // Edges
        .route("/api/edge/:id", get(handlers::edges::get_edge))
        .route("/api/edge/:id/nodes", get(handlers::edges::get_edge_endpoints))
        .route("/api/edges/:list", get(handlers::edges::get_edge_list))
        .with_state(store);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    // CORS: the viewer is often served from a different origin in development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
