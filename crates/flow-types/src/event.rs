//! Gesture events as seen by gates.

use crate::shape::ShapeClassName;
use serde::{Deserialize, Serialize};

/// The shape a pointer event landed on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventTarget {
    /// Class name of the hit shape, if it has one.
    #[serde(default)]
    pub class_name: Option<String>,
    /// Id of the node or edge owning the shape.
    #[serde(default)]
    pub item_id: Option<String>,
}

impl EventTarget {
    /// Target with a known shape class.
    pub fn of_class(class: ShapeClassName) -> Self {
        Self {
            class_name: Some(class.as_str().to_string()),
            item_id: None,
        }
    }

    /// Attach the owning item id.
    pub fn on_item(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Check if the hit shape has the given class.
    pub fn is(&self, class: ShapeClassName) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|name| class.matches(name))
    }
}

/// A gesture event dispatched by the engine to a behavior.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphEvent {
    /// Shape under the pointer. `None` when the event hit empty canvas.
    #[serde(default)]
    pub target: Option<EventTarget>,
}

impl GraphEvent {
    /// Event on empty canvas.
    pub fn on_canvas() -> Self {
        Self { target: None }
    }

    /// Event on a shape.
    pub fn on(target: EventTarget) -> Self {
        Self {
            target: Some(target),
        }
    }
}
