//! Static tooltip dictionary with a default fallback

use std::collections::{BTreeMap, HashMap};

use crate::types::Tooltip;

#[derive(Debug, Clone)]
pub struct TooltipStore {
    entries: HashMap<String, Tooltip>,
    fallback: Tooltip,
}

impl Default for TooltipStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tooltip(iri: &str, label: &str, kind: &str, description: &str) -> Tooltip {
    Tooltip {
        iri: iri.to_string(),
        label: label.to_string(),
        kind: kind.to_string(),
        description: description.to_string(),
    }
}

impl TooltipStore {
    pub fn builtin() -> Self {
        let entries = (1..=5)
            .map(|i| {
                let id = format!("n{i}");
                let record = tooltip(
                    &id,
                    &format!("Node {i}"),
                    "Node",
                    &format!("This is node {i}"),
                );
                (id, record)
            })
            .collect();
        Self {
            entries,
            fallback: tooltip("default", "Default", "Default", "Such emptiness 😞"),
        }
    }

    /// Builtin entries overlaid with `extra` (later wins).
    pub fn with_entries(extra: &BTreeMap<String, Tooltip>) -> Self {
        let mut store = Self::builtin();
        store
            .entries
            .extend(extra.iter().map(|(id, t)| (id.clone(), t.clone())));
        store
    }

    /// Tooltip for `id`, or the fallback record. Never fails.
    pub fn get(&self, id: &str) -> &Tooltip {
        self.entries.get(id).unwrap_or(&self.fallback)
    }
}
