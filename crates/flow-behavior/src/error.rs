//! Registry and composition errors.

use thiserror::Error;

/// Errors raised while registering behaviors or composing modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BehaviorError {
    /// A behavior with this name is already registered.
    #[error("Behavior '{name}' is already registered")]
    DuplicateName {
        /// The colliding name.
        name: String,
    },

    /// The mode override returned bindings that cannot form a mode.
    #[error("Invalid override for mode '{mode}': {reason}")]
    InvalidOverride {
        /// Mode being composed.
        mode: String,
        /// What was wrong with the returned bindings.
        reason: String,
    },
}

impl BehaviorError {
    /// Get an error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName { .. } => "DUPLICATE_NAME",
            Self::InvalidOverride { .. } => "INVALID_OVERRIDE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BehaviorError::DuplicateName {
            name: "click-item".into(),
        };
        assert!(err.to_string().contains("click-item"));
        assert_eq!(err.code(), "DUPLICATE_NAME");

        let err = BehaviorError::InvalidOverride {
            mode: "default".into(),
            reason: "duplicate behavior 'zoom-canvas'".into(),
        };
        assert!(err.to_string().contains("default"));
        assert!(err.to_string().contains("zoom-canvas"));
        assert_eq!(err.code(), "INVALID_OVERRIDE");
    }
}
