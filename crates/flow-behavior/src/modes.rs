//! Ordered binding sets and the per-mode configuration handed to the engine.

use std::collections::BTreeMap;

use flow_types::GraphEvent;

use crate::binding::{BehaviorBinding, BindingSummary, GesturePhase};

/// Ordered, name-unique sequence of bindings for one mode.
///
/// Order is priority: when two behaviors could claim the same input event the
/// earlier one wins.
#[derive(Debug, Clone, Default)]
pub struct BindingSet {
    bindings: Vec<BehaviorBinding>,
}

impl BindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from bindings returned by an override, checking the set invariants.
    ///
    /// Fails with a human readable reason on an empty or repeated behavior name.
    pub fn try_from_bindings(bindings: Vec<BehaviorBinding>) -> Result<Self, String> {
        let mut set = Self::new();
        for binding in bindings {
            if binding.behavior.trim().is_empty() {
                return Err("binding with empty behavior name".to_string());
            }
            if set.contains(&binding.behavior) {
                return Err(format!("duplicate behavior '{}'", binding.behavior));
            }
            set.bindings.push(binding);
        }
        Ok(set)
    }

    /// Insert a binding. An existing binding of the same behavior is replaced
    /// and keeps its position.
    pub fn insert(&mut self, binding: BehaviorBinding) {
        match self.position(&binding.behavior) {
            Some(slot) => self.bindings[slot] = binding,
            None => self.bindings.push(binding),
        }
    }

    /// Remove a binding by behavior name.
    pub fn remove(&mut self, behavior: &str) -> Option<BehaviorBinding> {
        self.position(behavior).map(|slot| self.bindings.remove(slot))
    }

    /// Keep only the bindings matching the predicate.
    pub fn retain(&mut self, keep: impl FnMut(&BehaviorBinding) -> bool) {
        self.bindings.retain(keep);
    }

    pub fn get(&self, behavior: &str) -> Option<&BehaviorBinding> {
        self.position(behavior).map(|slot| &self.bindings[slot])
    }

    pub fn contains(&self, behavior: &str) -> bool {
        self.position(behavior).is_some()
    }

    /// Behavior names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.behavior.as_str()).collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &BehaviorBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Copy of the bindings, the usual starting point for an override.
    pub fn to_vec(&self) -> Vec<BehaviorBinding> {
        self.bindings.clone()
    }

    pub fn into_vec(self) -> Vec<BehaviorBinding> {
        self.bindings
    }

    fn position(&self, behavior: &str) -> Option<usize> {
        self.bindings.iter().position(|b| b.behavior == behavior)
    }
}

/// Mode name → ordered behavior bindings, as consumed by the engine.
#[derive(Debug, Clone, Default)]
pub struct ModeConfig {
    modes: BTreeMap<String, Vec<BehaviorBinding>>,
}

impl ModeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bindings of a mode.
    pub fn insert(&mut self, mode: impl Into<String>, bindings: BindingSet) {
        self.modes.insert(mode.into(), bindings.into_vec());
    }

    /// Bindings of a mode, in priority order.
    pub fn bindings(&self, mode: &str) -> Option<&[BehaviorBinding]> {
        self.modes.get(mode).map(Vec::as_slice)
    }

    /// Behavior names of a mode, in priority order.
    pub fn behavior_names(&self, mode: &str) -> Vec<&str> {
        self.bindings(mode)
            .map(|bindings| bindings.iter().map(|b| b.behavior.as_str()).collect())
            .unwrap_or_default()
    }

    /// Mode names.
    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    /// A behavior's binding in a mode.
    pub fn binding(&self, mode: &str, behavior: &str) -> Option<&BehaviorBinding> {
        self.bindings(mode)?.iter().find(|b| b.behavior == behavior)
    }

    /// Whether a gesture phase of a behavior may run in a mode.
    ///
    /// Behaviors not bound in the mode never run.
    pub fn permits(
        &self,
        mode: &str,
        behavior: &str,
        phase: GesturePhase,
        event: &GraphEvent,
    ) -> bool {
        self.binding(mode, behavior)
            .is_some_and(|binding| binding.allows(phase, event))
    }

    /// Run a gesture phase of a behavior if the mode permits it.
    ///
    /// This is the engine's entry point when it dispatches a gesture phase.
    /// Returns whether the phase ran.
    pub fn dispatch(
        &self,
        mode: &str,
        behavior: &str,
        phase: GesturePhase,
        event: &GraphEvent,
    ) -> bool {
        self.binding(mode, behavior)
            .is_some_and(|binding| binding.dispatch(phase, event))
    }

    /// Behaviors of a mode listening to an engine event, in priority order.
    pub fn listeners<'a>(
        &'a self,
        mode: &str,
        event_name: &'a str,
    ) -> impl Iterator<Item = &'a BehaviorBinding> + 'a {
        self.bindings(mode)
            .unwrap_or_default()
            .iter()
            .filter(move |b| b.events().iter().any(|e| *e == event_name))
    }

    /// Serializable view: mode → binding summaries.
    pub fn summary(&self) -> BTreeMap<String, Vec<BindingSummary>> {
        self.modes
            .iter()
            .map(|(mode, bindings)| {
                (
                    mode.clone(),
                    bindings.iter().map(BehaviorBinding::summary).collect(),
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GestureGate;
    use crate::handler::{BehaviorHandler, PassiveHandler};
    use flow_types::{EventTarget, ShapeClassName};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn insert_replaces_in_place() {
        let mut set = BindingSet::new();
        set.insert(BehaviorBinding::new("a"));
        set.insert(BehaviorBinding::new("b"));
        set.insert(BehaviorBinding::new("a").update_when(GestureGate::on_event("deny", |_| false)));

        assert_eq!(set.names(), vec!["a", "b"]);
        assert_eq!(
            set.get("a").unwrap().gated_phases(),
            vec![GesturePhase::Update]
        );
    }

    #[test]
    fn remove_and_retain() {
        let mut set = BindingSet::new();
        for name in ["a", "b", "c"] {
            set.insert(BehaviorBinding::new(name));
        }

        assert!(set.remove("b").is_some());
        assert!(set.remove("b").is_none());
        set.retain(|b| b.behavior != "c");
        assert_eq!(set.names(), vec!["a"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn try_from_bindings_rejects_duplicates_and_blanks() {
        let err = BindingSet::try_from_bindings(vec![
            BehaviorBinding::new("a"),
            BehaviorBinding::new("a"),
        ])
        .unwrap_err();
        assert!(err.contains("'a'"));

        let err = BindingSet::try_from_bindings(vec![BehaviorBinding::new("  ")]).unwrap_err();
        assert!(err.contains("empty"));

        let set = BindingSet::try_from_bindings(vec![
            BehaviorBinding::new("b"),
            BehaviorBinding::new("a"),
        ])
        .unwrap();
        assert_eq!(set.names(), vec!["b", "a"]);
    }

    #[test]
    fn permits_requires_binding() {
        let mut set = BindingSet::new();
        set.insert(BehaviorBinding::new("open").begin_when(GestureGate::on_event("no", |_| false)));
        set.insert(BehaviorBinding::new("free"));

        let mut config = ModeConfig::new();
        config.insert("default", set);
        let event = GraphEvent::on_canvas();

        assert!(config.permits("default", "free", GesturePhase::Begin, &event));
        assert!(!config.permits("default", "open", GesturePhase::Begin, &event));
        assert!(config.permits("default", "open", GesturePhase::End, &event));
        assert!(!config.permits("default", "unbound", GesturePhase::Begin, &event));
        assert!(!config.permits("edit", "free", GesturePhase::Begin, &event));
    }

    #[test]
    fn summary_keeps_order() {
        let mut set = BindingSet::new();
        set.insert(BehaviorBinding::new("z"));
        set.insert(BehaviorBinding::new("a"));
        let mut config = ModeConfig::new();
        config.insert("default", set);

        let summary = config.summary();
        let names: Vec<_> = summary["default"].iter().map(|s| s.behavior.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(config.modes().collect::<Vec<_>>(), vec!["default"]);
    }

    #[derive(Default)]
    struct AnchorShy {
        begun: AtomicUsize,
    }

    impl BehaviorHandler for AnchorShy {
        fn should_begin(&self, event: &GraphEvent) -> bool {
            crate::gate::can_drag_node(event)
        }

        fn on_begin(&self, _event: &GraphEvent) {
            self.begun.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn dispatch_consults_handler_on_begin() {
        let handler = Arc::new(AnchorShy::default());
        let mut set = BindingSet::new();
        set.insert(BehaviorBinding::new("drag-node").with_handler(handler.clone()));
        let mut config = ModeConfig::new();
        config.insert("default", set);

        let anchor = GraphEvent::on(EventTarget::of_class(ShapeClassName::Anchor));
        let body = GraphEvent::on(EventTarget::of_class(ShapeClassName::KeyShape));

        assert!(!config.permits("default", "drag-node", GesturePhase::Begin, &anchor));
        assert!(!config.dispatch("default", "drag-node", GesturePhase::Begin, &anchor));
        assert!(config.dispatch("default", "drag-node", GesturePhase::Begin, &body));
        assert!(!config.dispatch("default", "unbound", GesturePhase::Begin, &body));
        assert_eq!(handler.begun.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listeners_follow_priority_order() {
        let mut set = BindingSet::new();
        set.insert(
            BehaviorBinding::new("hover-item")
                .with_handler(Arc::new(PassiveHandler::new(&["node:mouseenter"]))),
        );
        set.insert(BehaviorBinding::new("zoom-canvas"));
        set.insert(
            BehaviorBinding::new("hover-anchor")
                .with_handler(Arc::new(PassiveHandler::new(&["node:mouseenter", "anchor:mouseenter"]))),
        );
        let mut config = ModeConfig::new();
        config.insert("default", set);

        let names: Vec<_> = config
            .listeners("default", "node:mouseenter")
            .map(|b| b.behavior.as_str())
            .collect();
        assert_eq!(names, vec!["hover-item", "hover-anchor"]);
        assert_eq!(config.listeners("edit", "node:mouseenter").count(), 0);
    }
}
