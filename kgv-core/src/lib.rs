//! KGV core: knowledge graph cleaning and querying
//!
//! Loads a raw graph export, runs it through the cleaning pipeline
//! (dedup, weight normalization, structural filtering, label formatting,
//! color assignment) and freezes the result in a [`GraphStore`] that answers
//! id lookups for the HTTP layer.

pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod pipeline;
pub mod store;
pub mod tooltip;
pub mod types;

pub use config::{KgvConfig, PipelineConfig, ViewerConfig};
pub use error::{KgvError, Result};
pub use loader::RawGraph;
pub use pipeline::{Pipeline, PipelineReport};
pub use store::GraphStore;
pub use types::*;
