//! Host-owned UI state read by gesture gates.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Visibility of the inline label editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelState {
    /// No label is being edited; canvas gestures are free.
    Hide,
    /// A label editor is open over the canvas.
    Show,
}

/// Snapshot of the UI state relevant to gesture gating.
///
/// `label_state` is optional so that a host which has not reported its state
/// yet (or reported something unreadable) can be represented. Gates treat
/// that as "gesture disallowed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub label_state: Option<LabelState>,
}

impl UiState {
    /// State with a known label visibility.
    pub fn with_label(label_state: LabelState) -> Self {
        Self {
            label_state: Some(label_state),
        }
    }
}

/// Shared handle to the host's UI state.
///
/// The host writes through [`set_label_state`](Self::set_label_state) between
/// event-loop turns; gates call [`snapshot`](Self::snapshot) at the instant a
/// gesture phase is dispatched.
#[derive(Debug, Clone, Default)]
pub struct UiStateHandle {
    inner: Arc<RwLock<UiState>>,
}

impl UiStateHandle {
    /// Create a handle seeded with the given state.
    pub fn new(state: UiState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Read the current state. Returns `None` if the lock was poisoned.
    pub fn snapshot(&self) -> Option<UiState> {
        self.inner.read().ok().map(|state| *state)
    }

    /// Update the label visibility.
    ///
    /// Returns `false` if the lock was poisoned and the update was lost.
    pub fn set_label_state(&self, label_state: LabelState) -> bool {
        match self.inner.write() {
            Ok(mut state) => {
                state.label_state = Some(label_state);
                true
            }
            Err(_) => {
                warn!("UI state lock poisoned, label state {:?} dropped", label_state);
                false
            }
        }
    }

    /// Replace the whole state. Returns `false` if the lock was poisoned.
    pub fn replace(&self, next: UiState) -> bool {
        match self.inner.write() {
            Ok(mut state) => {
                *state = next;
                true
            }
            Err(_) => {
                warn!("UI state lock poisoned, state {:?} dropped", next);
                false
            }
        }
    }
}
