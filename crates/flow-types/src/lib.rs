//! Shared value types for the flow editor.
//!
//! Everything that crosses the boundary between the editor core, the host
//! container and the rendering engine lives here:
//!
//! - [`GraphType`] - editor flavor used to filter registered behaviors
//! - [`UiState`] / [`UiStateHandle`] - host-owned state read by gesture gates
//! - [`GraphData`] / [`GraphElement`] - caller-supplied nodes and edges
//! - [`GraphEvent`] / [`EventTarget`] - the gesture event seen by gates
//! - [`ShapeClassName`] - class names carried by rendered shapes

mod element;
mod event;
mod graph_type;
mod shape;
mod ui_state;

pub use element::{GraphData, GraphElement};
pub use event::{EventTarget, GraphEvent};
pub use graph_type::GraphType;
pub use shape::ShapeClassName;
pub use ui_state::{LabelState, UiState, UiStateHandle};

/// Prefix for the DOM container that hosts a flow graph.
pub const FLOW_CONTAINER_ID: &str = "J_FlowContainer";

/// Name of the only mode the editor core produces.
pub const DEFAULT_MODE: &str = "default";
