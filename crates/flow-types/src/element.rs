//! Caller-supplied graph data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node or edge as handed over by the caller.
///
/// Only `id` is interpreted by the editor core; every other field is carried
/// through untouched for the rendering engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl GraphElement {
    /// Element with no id and no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Element with the given id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Map::new(),
        }
    }

    /// Add an arbitrary field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Whether the element carries a usable id. Empty strings do not count.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Nodes and edges of one diagram.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphElement>,
    #[serde(default)]
    pub edges: Vec<GraphElement>,
}

impl GraphData {
    /// Create graph data from nodes and edges.
    pub fn new(nodes: Vec<GraphElement>, edges: Vec<GraphElement>) -> Self {
        Self { nodes, edges }
    }

    /// Iterate over nodes then edges.
    pub fn elements(&self) -> impl Iterator<Item = &GraphElement> {
        self.nodes.iter().chain(self.edges.iter())
    }

    /// Mutably iterate over nodes then edges.
    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut GraphElement> {
        self.nodes.iter_mut().chain(self.edges.iter_mut())
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    /// Check if there are no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn extra_fields_round_trip() {
        let raw = json!({
            "nodes": [{ "id": "a", "label": "Start", "x": 10 }],
            "edges": [{ "source": "a", "target": "b" }]
        });

        let data: GraphData = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(data.nodes[0].id.as_deref(), Some("a"));
        assert_eq!(data.nodes[0].fields["label"], json!("Start"));
        assert_eq!(data.edges[0].id, None);

        assert_eq!(serde_json::to_value(&data).unwrap(), raw);
    }

    #[test]
    fn empty_id_is_not_an_id() {
        assert!(!GraphElement::with_id("").has_id());
        assert!(!GraphElement::new().has_id());
        assert!(GraphElement::with_id("n1").has_id());
    }

    #[test]
    fn elements_visits_nodes_before_edges() {
        let data = GraphData::new(
            vec![GraphElement::with_id("n1"), GraphElement::with_id("n2")],
            vec![GraphElement::with_id("e1")],
        );
        let ids: Vec<_> = data.elements().filter_map(|e| e.id.as_deref()).collect();
        assert_eq!(ids, vec!["n1", "n2", "e1"]);
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
        assert!(GraphData::default().is_empty());
    }
}
