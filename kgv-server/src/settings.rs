//! Startup settings read from the environment
//!
//!   KGV_DATA         graph export to load (default: data/graph.json,
//!                    resolved against the working directory)
//!   KGV_CONFIG       optional YAML config file
//!   KGV_STATIC_DIR   optional directory served for non-API paths
//!   HOST / PORT      listen address (default: localhost:8080)

use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "data/graph.json";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub data_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!("Invalid PORT '{}', using {}: {}", raw, DEFAULT_PORT, e);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            data_path: non_empty("KGV_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_path),
            config_path: non_empty("KGV_CONFIG").map(PathBuf::from),
            static_dir: non_empty("KGV_STATIC_DIR").map(PathBuf::from),
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}
