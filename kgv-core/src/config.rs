//! Configuration for the cleaning pipeline and the viewer
//!
//! Loaded from YAML; every field has a default so an empty file (or no
//! file at all) yields the stock configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KgvError, Result};
use crate::pipeline::colors::Rgb;
use crate::types::Tooltip;

/// Label marking a non-semantic placeholder node in the export
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "IsupEntity";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KgvConfig {
    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Extra tooltip entries layered over the builtin dictionary
    #[serde(default)]
    pub tooltips: BTreeMap<String, Tooltip>,
}

/// Bounds and colors handed to the client verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    #[serde(default = "default_min_edge_weight")]
    pub min_edge_weight: i64,
    #[serde(default = "default_max_edge_weight")]
    pub max_edge_weight: i64,
    #[serde(default = "default_min_node_weight")]
    pub min_node_weight: i64,
    #[serde(default = "default_max_node_weight")]
    pub max_node_weight: i64,
    #[serde(default = "default_edge_color")]
    pub default_edge_color: String,
    #[serde(default = "highlighted_edge_color")]
    pub highlighted_edge_color: String,
    #[serde(default = "default_edge_text_color")]
    pub default_edge_text_color: String,
    #[serde(default = "highlighted_edge_text_color")]
    pub highlighted_edge_text_color: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_edge_weight: default_min_edge_weight(),
            max_edge_weight: default_max_edge_weight(),
            min_node_weight: default_min_node_weight(),
            max_node_weight: default_max_node_weight(),
            default_edge_color: default_edge_color(),
            highlighted_edge_color: highlighted_edge_color(),
            default_edge_text_color: default_edge_text_color(),
            highlighted_edge_text_color: highlighted_edge_text_color(),
        }
    }
}

fn default_min_edge_weight() -> i64 {
    1
}

fn default_max_edge_weight() -> i64 {
    10
}

fn default_min_node_weight() -> i64 {
    10
}

fn default_max_node_weight() -> i64 {
    100
}

fn default_edge_color() -> String {
    "#ccc".to_string()
}

fn highlighted_edge_color() -> String {
    "#eee".to_string()
}

fn default_edge_text_color() -> String {
    "#333".to_string()
}

fn highlighted_edge_text_color() -> String {
    "#ccc".to_string()
}

/// Settings that only the pipeline sees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    #[serde(default = "default_placeholder_label")]
    pub placeholder_label: String,

    /// Lightness added to a base color to get its highlight, in [0, 1]
    #[serde(default = "default_highlight_fraction")]
    pub highlight_fraction: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            placeholder_label: default_placeholder_label(),
            highlight_fraction: default_highlight_fraction(),
        }
    }
}

fn default_palette() -> Vec<String> {
    ["#091849", "#1d355d", "#0f162e", "#421034", "#3b012a"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_placeholder_label() -> String {
    DEFAULT_PLACEHOLDER_LABEL.to_string()
}

fn default_highlight_fraction() -> f64 {
    0.1
}

impl KgvConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| KgvError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: KgvConfig = serde_yaml::from_str(content)
            .map_err(|e| KgvError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        let v = &self.viewer;
        if v.min_node_weight > v.max_node_weight {
            return Err(KgvError::InvalidConfig(format!(
                "minNodeWeight {} exceeds maxNodeWeight {}",
                v.min_node_weight, v.max_node_weight
            )));
        }
        if v.min_edge_weight > v.max_edge_weight {
            return Err(KgvError::InvalidConfig(format!(
                "minEdgeWeight {} exceeds maxEdgeWeight {}",
                v.min_edge_weight, v.max_edge_weight
            )));
        }

        let p = &self.pipeline;
        if p.palette.is_empty() {
            return Err(KgvError::InvalidConfig("palette is empty".into()));
        }
        for color in &p.palette {
            Rgb::from_hex(color)?;
        }
        if !(0.0..=1.0).contains(&p.highlight_fraction) {
            return Err(KgvError::InvalidConfig(format!(
                "highlight_fraction {} is outside [0, 1]",
                p.highlight_fraction
            )));
        }
        Ok(())
    }
}
