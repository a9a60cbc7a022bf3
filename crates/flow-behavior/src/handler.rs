//! The behavior contract handed to the rendering engine.

use flow_types::GraphEvent;

/// Implementation of a named behavior.
///
/// The engine routes the events listed by [`events`](Self::events) to the
/// handler. Every hook has a permissive default so simple behaviors only
/// override what they need.
pub trait BehaviorHandler: Send + Sync {
    /// Engine event names this behavior listens to (e.g. `"node:dragstart"`).
    fn events(&self) -> &[&'static str] {
        &[]
    }

    /// Whether the gesture may start for this event.
    fn should_begin(&self, _event: &GraphEvent) -> bool {
        true
    }

    /// Gesture started.
    fn on_begin(&self, _event: &GraphEvent) {}

    /// Gesture moved.
    fn on_update(&self, _event: &GraphEvent) {}

    /// Gesture finished.
    fn on_end(&self, _event: &GraphEvent) {}
}

/// Handler that only declares the events it listens to.
///
/// Used for behaviors whose work happens entirely inside the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveHandler {
    events: &'static [&'static str],
}

impl PassiveHandler {
    pub const fn new(events: &'static [&'static str]) -> Self {
        Self { events }
    }
}

impl BehaviorHandler for PassiveHandler {
    fn events(&self) -> &[&'static str] {
        self.events
    }
}
