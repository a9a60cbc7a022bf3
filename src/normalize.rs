//! Data normalization
//!
//! Assigns ids to nodes and edges that arrive without one, before the data
//! reaches the engine. Elements that already carry an id are never touched,
//! so normalizing the same data twice only assigns ids once.

use flow_types::GraphData;
use tracing::debug;
use uuid::Uuid;

/// Source of fresh element ids.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random (v4) UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Assign a random id to every node and edge lacking one.
///
/// Returns the number of ids assigned.
pub fn normalize(data: &mut GraphData) -> usize {
    normalize_with(data, &UuidIdGenerator)
}

/// Assign ids from `ids` to every node and edge lacking one, nodes first.
pub fn normalize_with(data: &mut GraphData, ids: &impl IdGenerator) -> usize {
    let mut assigned = 0;

    for element in data.elements_mut() {
        if element.has_id() {
            continue;
        }
        element.id = Some(ids.next_id());
        assigned += 1;
    }

    if assigned > 0 {
        debug!("Assigned {} ids across {} elements", assigned, data.len());
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_types::GraphElement;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn single_node_gets_one_id() {
        let mut data = GraphData::new(vec![GraphElement::new()], vec![]);

        assert_eq!(normalize(&mut data), 1);
        let id = data.nodes[0].id.clone();
        assert!(id.is_some());
        assert!(data.edges.is_empty());

        // second pass leaves the id alone
        assert_eq!(normalize(&mut data), 0);
        assert_eq!(data.nodes[0].id, id);
    }

    #[test]
    fn existing_ids_preserved() {
        let mut data = GraphData::new(
            vec![GraphElement::with_id("a")],
            vec![GraphElement::with_id("b")],
        );
        let before = data.clone();

        assert_eq!(normalize(&mut data), 0);
        assert_eq!(data, before);
    }

    #[test]
    fn empty_string_id_is_replaced() {
        let mut data = GraphData::new(vec![GraphElement::with_id("")], vec![]);
        assert_eq!(normalize_with(&mut data, &|| "fresh".to_string()), 1);
        assert_eq!(data.nodes[0].id.as_deref(), Some("fresh"));
    }

    #[test]
    fn nodes_are_numbered_before_edges() {
        let counter = Cell::new(0);
        let ids = || {
            counter.set(counter.get() + 1);
            format!("id-{}", counter.get())
        };

        let mut data = GraphData::new(
            vec![GraphElement::new(), GraphElement::with_id("kept")],
            vec![GraphElement::new().field("source", "kept")],
        );
        assert_eq!(normalize_with(&mut data, &ids), 2);

        assert_eq!(data.nodes[0].id.as_deref(), Some("id-1"));
        assert_eq!(data.nodes[1].id.as_deref(), Some("kept"));
        assert_eq!(data.edges[0].id.as_deref(), Some("id-2"));
        assert_eq!(data.edges[0].fields["source"], "kept");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut data = GraphData::new(vec![GraphElement::new(); 50], vec![GraphElement::new(); 50]);
        normalize(&mut data);

        let ids: HashSet<_> = data.elements().filter_map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }

    fn arb_element() -> impl Strategy<Value = GraphElement> {
        prop::option::of("[a-z0-9]{1,8}").prop_map(|id| GraphElement {
            id,
            ..GraphElement::default()
        })
    }

    proptest! {
        #[test]
        fn every_element_has_id_and_existing_ids_survive(
            nodes in prop::collection::vec(arb_element(), 0..8),
            edges in prop::collection::vec(arb_element(), 0..8),
        ) {
            let mut data = GraphData::new(nodes, edges);
            let before = data.clone();
            let missing = before.elements().filter(|e| !e.has_id()).count();

            prop_assert_eq!(normalize(&mut data), missing);
            prop_assert!(data.elements().all(GraphElement::has_id));
            for (old, new) in before.elements().zip(data.elements()) {
                if old.has_id() {
                    prop_assert_eq!(&old.id, &new.id);
                }
            }
            prop_assert_eq!(normalize(&mut data), 0);
        }
    }
}
