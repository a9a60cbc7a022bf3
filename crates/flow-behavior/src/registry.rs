//! Behavior registry
//!
//! Holds every named behavior the editor knows about. Built once at startup
//! (directly or through [`BehaviorModule`]s) and shared read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use flow_types::GraphType;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::BehaviorError;
use crate::handler::BehaviorHandler;

/// A registered behavior.
#[derive(Clone)]
pub struct BehaviorDescriptor {
    /// Unique name, also the binding type in a mode.
    pub name: String,
    /// Restricts the behavior to one editor flavor. `None` applies everywhere.
    pub graph_type: Option<GraphType>,
    /// Implementation, carried into every binding composed from this entry.
    pub handler: Arc<dyn BehaviorHandler>,
}

impl BehaviorDescriptor {
    pub fn new(
        name: impl Into<String>,
        graph_type: Option<GraphType>,
        handler: Arc<dyn BehaviorHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            graph_type,
            handler,
        }
    }

    /// Check whether this behavior applies to the given graph type.
    pub fn applies_to(&self, graph_type: GraphType) -> bool {
        self.graph_type.map_or(true, |ty| ty == graph_type)
    }
}

impl fmt::Debug for BehaviorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorDescriptor")
            .field("name", &self.name)
            .field("graph_type", &self.graph_type)
            .field("events", &self.handler.events())
            .finish()
    }
}

/// What to do when a name is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with [`BehaviorError::DuplicateName`].
    #[default]
    Reject,
    /// Later registration wins and keeps the earlier slot.
    Replace,
}

/// A unit of side registration: a module that contributes behaviors.
pub trait BehaviorModule {
    /// Register this module's behaviors.
    fn register(&self, registry: &mut BehaviorRegistry) -> Result<(), BehaviorError>;
}

/// Registry of named behaviors, in registration order.
#[derive(Debug, Clone, Default)]
pub struct BehaviorRegistry {
    /// Descriptors in registration order
    behaviors: Vec<BehaviorDescriptor>,

    /// Name -> position in `behaviors`
    by_name: HashMap<String, usize>,

    policy: DuplicatePolicy,
}

impl BehaviorRegistry {
    /// Create an empty registry that rejects duplicate names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with an explicit duplicate policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The duplicate policy in effect
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a behavior
    pub fn register(&mut self, descriptor: BehaviorDescriptor) -> Result<(), BehaviorError> {
        if let Some(&slot) = self.by_name.get(&descriptor.name) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(BehaviorError::DuplicateName {
                    name: descriptor.name,
                }),
                DuplicatePolicy::Replace => {
                    warn!("Behavior '{}' re-registered, replacing", descriptor.name);
                    self.behaviors[slot] = descriptor;
                    Ok(())
                }
            };
        }

        debug!(
            "Registered behavior '{}' (graph type: {:?})",
            descriptor.name, descriptor.graph_type
        );
        self.by_name
            .insert(descriptor.name.clone(), self.behaviors.len());
        self.behaviors.push(descriptor);
        Ok(())
    }

    /// Register a behavior from its parts
    pub fn register_behavior(
        &mut self,
        name: impl Into<String>,
        graph_type: Option<GraphType>,
        handler: Arc<dyn BehaviorHandler>,
    ) -> Result<(), BehaviorError> {
        self.register(BehaviorDescriptor::new(name, graph_type, handler))
    }

    /// Let a module register its behaviors
    ///
    /// All or nothing: if the module fails, none of its registrations stay.
    pub fn install(&mut self, module: &dyn BehaviorModule) -> Result<(), BehaviorError> {
        let mut staged = self.clone();
        module.register(&mut staged)?;
        debug!("Module installed {} behaviors", staged.len() - self.len());
        *self = staged;
        Ok(())
    }

    /// Names of behaviors applicable to a graph type, in registration order
    pub fn list_for(&self, graph_type: GraphType) -> Vec<&str> {
        self.behaviors
            .iter()
            .filter(|b| b.applies_to(graph_type))
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Get a behavior by name
    pub fn get(&self, name: &str) -> Option<&BehaviorDescriptor> {
        self.by_name.get(name).map(|&slot| &self.behaviors[slot])
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All registered names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.behaviors.iter().map(|b| b.name.as_str()).collect()
    }

    /// Iterate over descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &BehaviorDescriptor> {
        self.behaviors.iter()
    }

    /// Get count of registered behaviors
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::PassiveHandler;

    fn passive() -> Arc<dyn BehaviorHandler> {
        Arc::new(PassiveHandler::default())
    }

    fn events_of(registry: &BehaviorRegistry, name: &str) -> Vec<&'static str> {
        registry
            .get(name)
            .map(|d| d.handler.events().to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn list_for_filters_by_graph_type() {
        let mut registry = BehaviorRegistry::new();
        registry.register_behavior("click-item", None, passive()).unwrap();
        registry
            .register_behavior("drag-add-edge", Some(GraphType::Flow), passive())
            .unwrap();
        registry
            .register_behavior("collapse-expand", Some(GraphType::Mind), passive())
            .unwrap();

        assert_eq!(
            registry.list_for(GraphType::Flow),
            vec!["click-item", "drag-add-edge"]
        );
        assert_eq!(
            registry.list_for(GraphType::Mind),
            vec!["click-item", "collapse-expand"]
        );
    }

    #[test]
    fn other_graph_type_is_excluded_from_flow() {
        let mut registry = BehaviorRegistry::new();
        registry
            .register_behavior("mind-only", Some(GraphType::Mind), passive())
            .unwrap();

        assert!(registry.contains("mind-only"));
        assert!(registry.list_for(GraphType::Flow).is_empty());
    }

    #[test]
    fn duplicate_rejected_by_default() {
        let mut registry = BehaviorRegistry::new();
        registry.register_behavior("hover-item", None, passive()).unwrap();

        let err = registry
            .register_behavior("hover-item", Some(GraphType::Flow), passive())
            .unwrap_err();
        assert_eq!(
            err,
            BehaviorError::DuplicateName {
                name: "hover-item".into()
            }
        );

        // First registration untouched
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("hover-item").unwrap().graph_type, None);
    }

    #[test]
    fn duplicate_replaces_in_place_when_allowed() {
        let mut registry = BehaviorRegistry::with_policy(DuplicatePolicy::Replace);
        registry.register_behavior("a", None, passive()).unwrap();
        registry.register_behavior("b", None, passive()).unwrap();
        registry
            .register_behavior(
                "a",
                Some(GraphType::Mind),
                Arc::new(PassiveHandler::new(&["node:click"])),
            )
            .unwrap();

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().graph_type, Some(GraphType::Mind));
        assert_eq!(events_of(&registry, "a"), vec!["node:click"]);
        assert_eq!(registry.list_for(GraphType::Flow), vec!["b"]);
    }

    #[test]
    fn install_propagates_module_errors() {
        struct Twice;
        impl BehaviorModule for Twice {
            fn register(&self, registry: &mut BehaviorRegistry) -> Result<(), BehaviorError> {
                registry.register_behavior("x", None, Arc::new(PassiveHandler::default()))?;
                registry.register_behavior("x", None, Arc::new(PassiveHandler::default()))
            }
        }

        let mut registry = BehaviorRegistry::new();
        registry.register_behavior("click-item", None, passive()).unwrap();

        let err = registry.install(&Twice).unwrap_err();
        assert_eq!(err.code(), "DUPLICATE_NAME");
        // failed module leaves nothing behind
        assert_eq!(registry.names(), vec!["click-item"]);
        assert!(!registry.contains("x"));
        assert!(registry.list_for(GraphType::Flow) == vec!["click-item"]);
    }

    #[test]
    fn empty_registry() {
        let registry = BehaviorRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.policy(), DuplicatePolicy::Reject);
        assert!(registry.get("missing").is_none());
        assert!(registry.list_for(GraphType::Flow).is_empty());
    }
}
