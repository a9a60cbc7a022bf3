//! Gesture gate policy.
//!
//! Pure predicates deciding whether a gesture may run, plus [`GestureGate`],
//! the dispatch-time wrapper the engine evaluates at each gesture phase.
//!
//! Canvas drag and canvas zoom are currently gated by the same rule (labels
//! hidden). Both go through `labels_hidden` so they cannot drift apart
//! without an explicit change here.

use std::fmt;
use std::sync::Arc;

use flow_types::{GraphEvent, LabelState, ShapeClassName, UiState, UiStateHandle};
use tracing::trace;

fn labels_hidden(state: Option<&UiState>) -> bool {
    matches!(
        state.and_then(|s| s.label_state),
        Some(LabelState::Hide)
    )
}

/// Canvas drag is allowed only while no label editor is shown.
///
/// Absent state or unknown label visibility disallows the gesture.
pub fn can_drag_canvas(state: Option<&UiState>) -> bool {
    labels_hidden(state)
}

/// Canvas zoom is allowed only while no label editor is shown.
pub fn can_zoom_canvas(state: Option<&UiState>) -> bool {
    labels_hidden(state)
}

/// Node drag is allowed when the pointer hit a shape that is not an anchor.
///
/// Dragging from an anchor starts an edge instead, and an event without a
/// target never drags a node.
pub fn can_drag_node(event: &GraphEvent) -> bool {
    event
        .target
        .as_ref()
        .is_some_and(|target| !target.is(ShapeClassName::Anchor))
}

type GateFn = dyn Fn(&GraphEvent) -> bool + Send + Sync;

/// Predicate evaluated by the engine when a gesture phase is dispatched.
#[derive(Clone)]
pub struct GestureGate {
    name: &'static str,
    check: Arc<GateFn>,
}

impl GestureGate {
    /// Gate on the concrete event.
    pub fn on_event<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&GraphEvent) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(predicate),
        }
    }

    /// Gate on the host's UI state, read at evaluation time.
    ///
    /// A poisoned state lock is passed to the predicate as absent state.
    pub fn on_ui_state(
        name: &'static str,
        state: UiStateHandle,
        predicate: fn(Option<&UiState>) -> bool,
    ) -> Self {
        Self::on_event(name, move |_event| {
            let snapshot = state.snapshot();
            predicate(snapshot.as_ref())
        })
    }

    /// Name of the predicate, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the gate.
    pub fn allows(&self, event: &GraphEvent) -> bool {
        let allowed = (self.check)(event);
        if !allowed {
            trace!("Gesture suppressed by gate '{}'", self.name);
        }
        allowed
    }
}

impl fmt::Debug for GestureGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GestureGate").field(&self.name).finish()
    }
}
