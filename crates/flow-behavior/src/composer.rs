//! Mode composition
//!
//! Turns the registry contents for one graph type into the engine's mode
//! configuration: registered behaviors first (registration order, each
//! carrying its handler), then the gated canvas built-ins, then the caller's
//! override.

use flow_types::{GraphType, UiStateHandle, DEFAULT_MODE};
use tracing::debug;

use crate::binding::BehaviorBinding;
use crate::error::BehaviorError;
use crate::gate::{can_drag_canvas, can_zoom_canvas, GestureGate};
use crate::modes::{BindingSet, ModeConfig};
use crate::registry::BehaviorRegistry;
use crate::{FLOW_DRAG_CANVAS, ZOOM_CANVAS};

/// Caller hook that customizes the bindings of a mode.
///
/// Receives the mode name and the composed default bindings and returns the
/// bindings to use instead. The result is validated before use.
pub trait ModeOverride {
    fn apply(&self, mode: &str, defaults: &BindingSet) -> Vec<BehaviorBinding>;
}

impl<F> ModeOverride for F
where
    F: Fn(&str, &BindingSet) -> Vec<BehaviorBinding>,
{
    fn apply(&self, mode: &str, defaults: &BindingSet) -> Vec<BehaviorBinding> {
        self(mode, defaults)
    }
}

/// Builds [`ModeConfig`]s from a registry.
pub struct ModeComposer<'a> {
    registry: &'a BehaviorRegistry,
    ui_state: UiStateHandle,
}

impl<'a> ModeComposer<'a> {
    /// Composer whose canvas gates read the given UI state.
    pub fn new(registry: &'a BehaviorRegistry, ui_state: UiStateHandle) -> Self {
        Self { registry, ui_state }
    }

    /// Default bindings for a graph type, before any override.
    pub fn default_bindings(&self, graph_type: GraphType) -> BindingSet {
        let mut set = BindingSet::new();

        for descriptor in self.registry.iter().filter(|d| d.applies_to(graph_type)) {
            set.insert(
                BehaviorBinding::new(descriptor.name.as_str())
                    .with_handler(descriptor.handler.clone()),
            );
        }

        set.insert(BehaviorBinding::new(FLOW_DRAG_CANVAS).always_when(
            GestureGate::on_ui_state("can_drag_canvas", self.ui_state.clone(), can_drag_canvas),
        ));
        set.insert(BehaviorBinding::new(ZOOM_CANVAS).update_when(GestureGate::on_ui_state(
            "can_zoom_canvas",
            self.ui_state.clone(),
            can_zoom_canvas,
        )));

        set
    }

    /// Compose the mode configuration for a graph type.
    pub fn compose(
        &self,
        graph_type: GraphType,
        mode_override: Option<&dyn ModeOverride>,
    ) -> Result<ModeConfig, BehaviorError> {
        let mut config = ModeConfig::new();

        for mode in [DEFAULT_MODE] {
            let defaults = self.default_bindings(graph_type);

            let bindings = match mode_override {
                Some(hook) => BindingSet::try_from_bindings(hook.apply(mode, &defaults))
                    .map_err(|reason| BehaviorError::InvalidOverride {
                        mode: mode.to_string(),
                        reason,
                    })?,
                None => defaults,
            };

            debug!(
                "Composed mode '{}' for {}: {:?}",
                mode,
                graph_type,
                bindings.names()
            );
            config.insert(mode, bindings);
        }

        Ok(config)
    }
}
