//! Editor error types.

use flow_behavior::BehaviorError;
use thiserror::Error;

use crate::engine::EngineError;

/// Errors raised while bootstrapping the graph engine.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Registry or mode composition failure.
    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    /// The rendering engine constructor failed. Not retried.
    #[error("Graph engine construction failed: {0}")]
    EngineConstruction(#[source] EngineError),
}

impl EditorError {
    /// Get an error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Behavior(err) => err.code(),
            Self::EngineConstruction(_) => "ENGINE_CONSTRUCTION",
        }
    }
}
