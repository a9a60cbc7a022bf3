//! Engine bootstrapping
//!
//! [`initialize`] is the single path from a registry to a live graph:
//! compose the modes, then hand container, size and modes to the engine.
//! [`FlowEditor`] bundles what a flow editor instance keeps between calls.

use std::sync::Arc;

use flow_behavior::{BehaviorRegistry, ModeComposer, ModeConfig, ModeOverride};
use flow_types::{GraphData, GraphType, LabelState, UiState, UiStateHandle, FLOW_CONTAINER_ID};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::engine::{EngineOptions, GraphEngine};
use crate::error::EditorError;
use crate::normalize::normalize;

/// Compose the default mode and construct the engine.
///
/// Engine failures are returned as [`EditorError::EngineConstruction`]
/// without retry.
#[allow(clippy::too_many_arguments)]
pub fn initialize<E: GraphEngine>(
    engine: &E,
    registry: &BehaviorRegistry,
    ui_state: &UiStateHandle,
    container_id: &str,
    width: u32,
    height: u32,
    graph_type: GraphType,
    mode_override: Option<&dyn ModeOverride>,
) -> Result<E::Instance, EditorError> {
    let modes = ModeComposer::new(registry, ui_state.clone()).compose(graph_type, mode_override)?;

    info!(
        "Initializing {} graph in '{}' ({}x{}, {} modes)",
        graph_type,
        container_id,
        width,
        height,
        modes.len()
    );

    engine
        .construct(EngineOptions {
            container: container_id.to_string(),
            width,
            height,
            modes,
        })
        .map_err(|err| {
            error!("Graph engine construction failed for '{}': {}", container_id, err);
            EditorError::EngineConstruction(err)
        })
}

/// One flow editor instance.
pub struct FlowEditor {
    container_id: String,
    graph_type: GraphType,
    registry: Arc<BehaviorRegistry>,
    ui_state: UiStateHandle,
    custom_modes: Option<Box<dyn ModeOverride>>,
}

impl FlowEditor {
    /// Flow editor with labels hidden and no custom modes.
    pub fn new(registry: Arc<BehaviorRegistry>) -> Self {
        Self {
            container_id: container_id_for(FLOW_CONTAINER_ID),
            graph_type: GraphType::Flow,
            registry,
            ui_state: UiStateHandle::new(UiState::with_label(LabelState::Hide)),
            custom_modes: None,
        }
    }

    /// Editor set up from configuration. Configured mode rules become the
    /// custom modes override.
    ///
    /// The registry is already populated, so its duplicate policy is fixed;
    /// build it with [`EditorConfig::registry`] to honor the configured one.
    pub fn from_config(registry: Arc<BehaviorRegistry>, config: &EditorConfig) -> Self {
        if registry.policy() != config.duplicate_policy {
            warn!(
                "Registry duplicate policy {:?} differs from configured {:?}",
                registry.policy(),
                config.duplicate_policy
            );
        }
        let mut editor = Self::new(registry);
        editor.container_id = container_id_for(&config.container_prefix);
        editor.graph_type = config.graph_type;
        editor.ui_state = UiStateHandle::new(UiState {
            label_state: config.label_state,
        });
        if let Some(modes) = config.mode_override() {
            editor.custom_modes = Some(Box::new(modes));
        }
        editor
    }

    /// Share a UI state handle owned by the host.
    pub fn with_ui_state(mut self, ui_state: UiStateHandle) -> Self {
        self.ui_state = ui_state;
        self
    }

    /// Customize composed modes. Replaces any configured override.
    pub fn with_custom_modes(mut self, custom_modes: impl ModeOverride + 'static) -> Self {
        self.custom_modes = Some(Box::new(custom_modes));
        self
    }

    pub fn with_graph_type(mut self, graph_type: GraphType) -> Self {
        self.graph_type = graph_type;
        self
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn registry(&self) -> &BehaviorRegistry {
        &self.registry
    }

    /// Handle the host uses to report label visibility.
    pub fn ui_state(&self) -> &UiStateHandle {
        &self.ui_state
    }

    /// Compose this editor's modes without constructing an engine.
    pub fn modes(&self) -> Result<ModeConfig, EditorError> {
        let modes = ModeComposer::new(&self.registry, self.ui_state.clone())
            .compose(self.graph_type, self.custom_modes.as_deref())?;
        Ok(modes)
    }

    /// Prepare caller data for the engine (assigns missing ids).
    pub fn parse_data(&self, data: &mut GraphData) {
        normalize(data);
    }

    /// Build the engine instance for the measured container size.
    pub fn init_graph<E: GraphEngine>(
        &self,
        engine: &E,
        width: u32,
        height: u32,
    ) -> Result<E::Instance, EditorError> {
        initialize(
            engine,
            &self.registry,
            &self.ui_state,
            &self.container_id,
            width,
            height,
            self.graph_type,
            self.custom_modes.as_deref(),
        )
    }
}

fn container_id_for(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
