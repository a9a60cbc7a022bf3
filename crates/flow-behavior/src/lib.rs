//! Behavior registration and mode composition for the flow editor.
//!
//! This crate provides:
//!
//! - **BehaviorRegistry**: named interaction behaviors, filtered by graph type
//! - **Gesture gates**: predicates deciding whether drag/zoom gestures may run
//! - **ModeComposer**: registry + built-in gated bindings + caller override
//!   → ordered behavior list per mode
//!
//! # Architecture
//!
//! ```text
//! BehaviorModule ──► BehaviorRegistry ──list_for(graph_type)──┐
//!                                                             ▼
//! UiStateHandle ──► gate predicates ──► built-in bindings ──► BindingSet
//!                                                             │
//!                                          ModeOverride ◄─────┤ (validated)
//!                                                             ▼
//!                                                         ModeConfig ──► engine
//! ```
//!
//! # Example
//!
//! ```ignore
//! use flow_behavior::{BehaviorRegistry, ModeComposer};
//! use flow_types::{GraphType, UiStateHandle};
//!
//! let mut registry = BehaviorRegistry::new();
//! registry.install(&flow_behavior::FlowBehaviors)?;
//!
//! let modes = ModeComposer::new(&registry, UiStateHandle::default())
//!     .compose(GraphType::Flow, None)?;
//! ```

mod binding;
mod builtin;
mod composer;
mod error;
mod gate;
mod handler;
mod modes;
mod registry;

pub use binding::{BehaviorBinding, BindingSummary, GesturePhase};
pub use builtin::{FlowBehaviors, CLICK_ITEM, DRAG_ADD_EDGE, DRAG_NODE, HOVER_ANCHOR, HOVER_ITEM};
pub use composer::{ModeComposer, ModeOverride};
pub use error::BehaviorError;
pub use gate::{can_drag_canvas, can_drag_node, can_zoom_canvas, GestureGate};
pub use handler::{BehaviorHandler, PassiveHandler};
pub use modes::{BindingSet, ModeConfig};
pub use registry::{BehaviorDescriptor, BehaviorModule, BehaviorRegistry, DuplicatePolicy};

/// Built-in canvas drag behavior, gated on label visibility.
pub const FLOW_DRAG_CANVAS: &str = "flow-drag-canvas";

/// Built-in canvas zoom behavior, gated on label visibility.
pub const ZOOM_CANVAS: &str = "zoom-canvas";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_distinct() {
        assert_ne!(FLOW_DRAG_CANVAS, ZOOM_CANVAS);
        assert!(!FLOW_DRAG_CANVAS.is_empty());
    }
}
