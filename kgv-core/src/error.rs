//! Error types for graph loading, cleaning and querying.
//!
//! Construction-time variants (`Io`, `Parse`, `InvalidConfig`) abort startup.
//! Query-time variants (`NotFound`, `Serialization`) are local to one request.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KgvError>;

#[derive(Debug, Error)]
pub enum KgvError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed graph document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to serialize {what}: {source}")]
    Serialization {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

impl KgvError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Parse(_) | Self::InvalidConfig(_) => 400,
            Self::Io { .. } | Self::Serialization { .. } => 500,
        }
    }

    /// True for client-facing misses, as opposed to system faults.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
