//! Namespace deduplication
//!
//! The export repeats one logical entity under several namespace-qualified
//! IRIs. Nodes are grouped by the qualified name of their IRI, edges by
//! `(source, qname(iri), target)`. Weights within a group are summed; every
//! other attribute comes from the last record seen in input order.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{EdgeData, NodeData};

/// Segment of `iri` after its final `/`.
pub fn qname(iri: &str) -> &str {
    match iri.rfind('/') {
        Some(pos) => &iri[pos + 1..],
        None => iri,
    }
}

/// A record that can be merged with its duplicates
pub trait Mergeable {
    fn id(&self) -> &str;
    fn weight(&self) -> i64;
    fn set_weight(&mut self, weight: i64);
}

impl Mergeable for NodeData {
    fn id(&self) -> &str {
        &self.id
    }
    fn weight(&self) -> i64 {
        self.weight
    }
    fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }
}

impl Mergeable for EdgeData {
    fn id(&self) -> &str {
        &self.id
    }
    fn weight(&self) -> i64 {
        self.weight
    }
    fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }
}

/// Result of collapsing duplicate records
#[derive(Debug, Clone, PartialEq)]
pub struct Squashed<T> {
    /// Surviving records, sorted by id
    pub records: Vec<T>,
    /// `(absorbed id, survivor id)` for every merged record whose id differs
    /// from its survivor's
    pub aliases: Vec<(String, String)>,
}

impl<T> Squashed<T> {
    pub fn alias_map(&self) -> HashMap<&str, &str> {
        self.aliases
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect()
    }
}

struct Group<T> {
    survivor: T,
    members: Vec<String>,
    last_seen: usize,
}

impl<T: Mergeable> Group<T> {
    fn absorb(&mut self, mut record: T, seq: usize) {
        record.set_weight(self.survivor.weight().saturating_add(record.weight()));
        self.members.push(record.id().to_string());
        self.survivor = record;
        self.last_seen = seq;
    }

    /// Fold another group in; whichever was seen last supplies the survivor.
    fn merge_with(&mut self, other: Group<T>) {
        let weight = self.survivor.weight().saturating_add(other.survivor.weight());
        if other.last_seen > self.last_seen {
            let older = std::mem::replace(self, other);
            self.members.extend(older.members);
        } else {
            self.members.extend(other.members);
        }
        self.survivor.set_weight(weight);
    }
}

/// Collapse records sharing a key. Output is sorted by id; records with
/// distinct keys but the same id are merged as well so ids stay unique.
pub fn squash<T, K, F>(records: Vec<T>, key: F) -> Squashed<T>
where
    T: Mergeable,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<T>> = Vec::new();

    for (seq, record) in records.into_iter().enumerate() {
        let k = key(&record);
        match slots.get(&k) {
            Some(&slot) => groups[slot].absorb(record, seq),
            None => {
                slots.insert(k, groups.len());
                groups.push(Group {
                    members: vec![record.id().to_string()],
                    survivor: record,
                    last_seen: seq,
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        a.survivor
            .id()
            .cmp(b.survivor.id())
            .then(a.last_seen.cmp(&b.last_seen))
    });

    let mut merged: Vec<Group<T>> = Vec::with_capacity(groups.len());
    for group in groups {
        match merged.last_mut() {
            Some(prev) if prev.survivor.id() == group.survivor.id() => {
                tracing::warn!(
                    id = group.survivor.id(),
                    "Distinct records share an id; merging them"
                );
                prev.merge_with(group);
            }
            _ => merged.push(group),
        }
    }

    let surviving: std::collections::HashSet<String> = merged
        .iter()
        .map(|g| g.survivor.id().to_string())
        .collect();

    let mut aliases = Vec::new();
    let mut out = Vec::with_capacity(merged.len());
    for group in merged {
        let survivor_id = group.survivor.id().to_string();
        for member in group.members {
            if member != survivor_id && !surviving.contains(&member) {
                aliases.push((member, survivor_id.clone()));
            }
        }
        out.push(group.survivor);
    }
    aliases.sort();
    aliases.dedup();

    Squashed {
        records: out,
        aliases,
    }
}

pub fn squash_nodes(nodes: Vec<NodeData>) -> Squashed<NodeData> {
    squash(nodes, |n| qname(&n.iri).to_string())
}

pub fn squash_edges(edges: Vec<EdgeData>) -> Squashed<EdgeData> {
    squash(edges, |e| {
        (
            e.source.clone(),
            qname(&e.iri).to_string(),
            e.target.clone(),
        )
    })
}

/// Point edge endpoints that name an absorbed node at its survivor.
/// Returns the number of endpoints rewritten.
pub fn rewire_edges(edges: &mut [EdgeData], aliases: &HashMap<&str, &str>) -> usize {
    if aliases.is_empty() {
        return 0;
    }
    let mut rewired = 0;
    for edge in edges.iter_mut() {
        for endpoint in [&mut edge.source, &mut edge.target] {
            if let Some(survivor) = aliases.get(endpoint.as_str()) {
                *endpoint = (*survivor).to_string();
                rewired += 1;
            }
        }
    }
    rewired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, iri: &str, label: &str, weight: i64) -> NodeData {
        NodeData {
            id: id.into(),
            iri: iri.into(),
            label: label.into(),
            weight,
            color: String::new(),
            highlight_color: String::new(),
        }
    }

    fn edge(id: &str, iri: &str, source: &str, target: &str, weight: i64) -> EdgeData {
        EdgeData {
            id: id.into(),
            iri: iri.into(),
            source: source.into(),
            target: target.into(),
            label: String::new(),
            weight,
        }
    }

    #[test]
    fn test_qname() {
        assert_eq!(qname("http://a.org/onto/Widget"), "Widget");
        assert_eq!(qname("Widget"), "Widget");
        assert_eq!(qname("http://a.org/"), "");
        assert_eq!(qname(""), "");
    }

    #[test]
    fn test_squash_sums_weights() {
        let out = squash_nodes(vec![
            node("w", "http://a.org/Widget", "Widget", 3),
            node("w", "http://b.org/ns/Widget", "Widget", 5),
            node("g", "http://a.org/Gadget", "Gadget", 1),
        ]);
        assert_eq!(out.records.len(), 2);
        let widget = out.records.iter().find(|n| n.id == "w").unwrap();
        assert_eq!(widget.weight, 8);
        assert!(out.aliases.is_empty());
    }

    #[test]
    fn test_squash_last_seen_attributes_win() {
        let out = squash_nodes(vec![
            node("a1", "http://a.org/Widget", "First", 1),
            node("a2", "http://b.org/Widget", "Second", 1),
            node("a3", "http://c.org/Widget", "Third", 1),
        ]);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].id, "a3");
        assert_eq!(out.records[0].label, "Third");
        assert_eq!(out.records[0].weight, 3);
        assert_eq!(
            out.aliases,
            vec![
                ("a1".to_string(), "a3".to_string()),
                ("a2".to_string(), "a3".to_string())
            ]
        );
    }

    #[test]
    fn test_squash_is_idempotent() {
        let once = squash_nodes(vec![
            node("b", "x/B", "B", 2),
            node("a", "x/A", "A", 4),
            node("a", "y/A", "A", 6),
        ]);
        let twice = squash_nodes(once.records.clone());
        assert_eq!(once.records, twice.records);
        assert!(twice.aliases.is_empty());
    }

    #[test]
    fn test_squash_output_sorted_by_id() {
        let out = squash_nodes(vec![
            node("c", "x/C", "C", 1),
            node("a", "x/A", "A", 1),
            node("b", "x/B", "B", 1),
        ]);
        let ids: Vec<_> = out.records.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_squash_merges_id_collisions_across_keys() {
        let out = squash_nodes(vec![
            node("n", "x/First", "First", 2),
            node("n", "x/Second", "Second", 3),
        ]);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].label, "Second");
        assert_eq!(out.records[0].weight, 5);
    }

    #[test]
    fn test_squash_weight_saturates() {
        let out = squash_nodes(vec![
            node("a", "x/A", "A", i64::MAX),
            node("a", "y/A", "A", 10),
        ]);
        assert_eq!(out.records[0].weight, i64::MAX);
    }

    #[test]
    fn test_squash_edges_by_triple() {
        let out = squash_edges(vec![
            edge("e1", "http://a.org/uses", "s", "t", 1),
            edge("e2", "http://b.org/uses", "s", "t", 4),
            edge("e3", "http://a.org/uses", "t", "s", 1),
            edge("e4", "http://a.org/owns", "s", "t", 1),
        ]);
        assert_eq!(out.records.len(), 3);
        let merged = out.records.iter().find(|e| e.id == "e2").unwrap();
        assert_eq!(merged.weight, 5);
        assert_eq!(out.aliases, vec![("e1".to_string(), "e2".to_string())]);
    }

    #[test]
    fn test_rewire_edges() {
        let squashed = squash_nodes(vec![
            node("old", "a/Widget", "Widget", 1),
            node("new", "b/Widget", "Widget", 1),
        ]);
        let aliases = squashed.alias_map();
        let mut edges = vec![edge("e1", "r", "old", "other", 1)];
        assert_eq!(rewire_edges(&mut edges, &aliases), 1);
        assert_eq!(edges[0].source, "new");
        assert_eq!(edges[0].target, "other");
    }
}
