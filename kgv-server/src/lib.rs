//! KGV server: read-only HTTP queries over a cleaned knowledge graph.

pub mod error;
pub mod handlers;
pub mod router;
pub mod settings;

pub use router::build_router;
pub use settings::ServerSettings;
