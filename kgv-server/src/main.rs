//! kgv-server: serves a cleaned knowledge graph to the browser viewer.
//!
//! The graph is loaded and cleaned once before the listener is bound; a bad
//! export or config aborts startup.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kgv_core::{GraphStore, KgvConfig};
use kgv_server::{build_router, ServerSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kgv_server=info,kgv_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ServerSettings::from_env();

    let config = match &settings.config_path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            KgvConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => KgvConfig::default(),
    };

    tracing::info!("Loading graph from {}", settings.data_path.display());
    let store = GraphStore::from_path(&settings.data_path, &config).with_context(|| {
        format!("failed to build graph from {}", settings.data_path.display())
    })?;
    let store = Arc::new(store);

    if let Some(dir) = &settings.static_dir {
        tracing::info!("Serving static files from: {}", dir.display());
    }
    let app = build_router(store, settings.static_dir.clone());

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
