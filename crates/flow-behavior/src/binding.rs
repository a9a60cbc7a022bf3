//! Behavior bindings: a behavior name plus its per-phase gates.

use std::fmt;
use std::sync::Arc;

use flow_types::GraphEvent;
use serde::{Deserialize, Serialize};

use crate::gate::GestureGate;
use crate::handler::BehaviorHandler;

/// Gesture lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Begin,
    Update,
    End,
}

impl GesturePhase {
    pub fn all() -> &'static [GesturePhase] {
        &[GesturePhase::Begin, GesturePhase::Update, GesturePhase::End]
    }
}

/// A behavior attached to a mode.
///
/// A phase without a gate is always allowed. When the binding carries the
/// registered handler, the handler's own `should_begin` also has to agree
/// before a gesture starts. Bindings without a handler (the canvas built-ins,
/// names added by an override) are implemented by the engine itself.
#[derive(Clone)]
pub struct BehaviorBinding {
    /// Behavior name (the binding type).
    pub behavior: String,
    pub should_begin: Option<GestureGate>,
    pub should_update: Option<GestureGate>,
    pub should_end: Option<GestureGate>,
    /// Registered implementation, resolved from the registry at composition.
    pub handler: Option<Arc<dyn BehaviorHandler>>,
}

impl BehaviorBinding {
    /// Ungated binding.
    pub fn new(behavior: impl Into<String>) -> Self {
        Self {
            behavior: behavior.into(),
            should_begin: None,
            should_update: None,
            should_end: None,
            handler: None,
        }
    }

    /// Attach the behavior's implementation.
    pub fn with_handler(mut self, handler: Arc<dyn BehaviorHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Gate the begin phase.
    pub fn begin_when(mut self, gate: GestureGate) -> Self {
        self.should_begin = Some(gate);
        self
    }

    /// Gate the update phase.
    pub fn update_when(mut self, gate: GestureGate) -> Self {
        self.should_update = Some(gate);
        self
    }

    /// Gate the end phase.
    pub fn end_when(mut self, gate: GestureGate) -> Self {
        self.should_end = Some(gate);
        self
    }

    /// Gate every phase with the same predicate.
    pub fn always_when(self, gate: GestureGate) -> Self {
        self.begin_when(gate.clone())
            .update_when(gate.clone())
            .end_when(gate)
    }

    /// The gate for a phase, if any.
    pub fn gate(&self, phase: GesturePhase) -> Option<&GestureGate> {
        match phase {
            GesturePhase::Begin => self.should_begin.as_ref(),
            GesturePhase::Update => self.should_update.as_ref(),
            GesturePhase::End => self.should_end.as_ref(),
        }
    }

    /// Evaluate the gate for a phase, plus the handler's veto on begin.
    pub fn allows(&self, phase: GesturePhase, event: &GraphEvent) -> bool {
        if !self.gate(phase).map_or(true, |gate| gate.allows(event)) {
            return false;
        }
        match (phase, &self.handler) {
            (GesturePhase::Begin, Some(handler)) => handler.should_begin(event),
            _ => true,
        }
    }

    /// Run a gesture phase if it is allowed. Returns whether it ran.
    pub fn dispatch(&self, phase: GesturePhase, event: &GraphEvent) -> bool {
        if !self.allows(phase, event) {
            return false;
        }
        if let Some(handler) = &self.handler {
            match phase {
                GesturePhase::Begin => handler.on_begin(event),
                GesturePhase::Update => handler.on_update(event),
                GesturePhase::End => handler.on_end(event),
            }
        }
        true
    }

    /// Engine events the handler listens to. Empty for engine-native behaviors.
    pub fn events(&self) -> &[&'static str] {
        match &self.handler {
            Some(handler) => handler.events(),
            None => &[],
        }
    }

    /// Phases that carry a gate.
    pub fn gated_phases(&self) -> Vec<GesturePhase> {
        GesturePhase::all()
            .iter()
            .copied()
            .filter(|phase| self.gate(*phase).is_some())
            .collect()
    }

    /// Serializable view of this binding.
    pub fn summary(&self) -> BindingSummary {
        BindingSummary {
            behavior: self.behavior.clone(),
            gated: self.gated_phases(),
            events: self.events().iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl fmt::Debug for BehaviorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorBinding")
            .field("behavior", &self.behavior)
            .field("should_begin", &self.should_begin)
            .field("should_update", &self.should_update)
            .field("should_end", &self.should_end)
            .field("events", &self.events())
            .finish()
    }
}

/// Serializable description of a binding (gates are not serializable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSummary {
    #[serde(rename = "type")]
    pub behavior: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gated: Vec<GesturePhase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
}
