//! Editor YAML configuration
//!
//! ```yaml
//! graph_type: flow
//! container_prefix: J_FlowContainer
//! duplicate_policy: reject
//! label_state: hide
//! modes:
//!   default:
//!     exclude: [zoom-canvas]
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use flow_behavior::{BehaviorBinding, BehaviorRegistry, BindingSet, DuplicatePolicy, ModeOverride};
use flow_types::{GraphType, LabelState, FLOW_CONTAINER_ID};
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// Editor flavor used to filter registered behaviors
    #[serde(default)]
    pub graph_type: GraphType,

    /// Prefix of the generated container id
    #[serde(default = "default_container_prefix")]
    pub container_prefix: String,

    /// How the registry treats a repeated behavior name
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Initial label visibility; `~` means canvas gestures start disabled
    #[serde(default = "default_label_state")]
    pub label_state: Option<LabelState>,

    /// Per-mode adjustments applied after composition
    #[serde(default)]
    pub modes: HashMap<String, ModeRules>,
}

fn default_container_prefix() -> String {
    FLOW_CONTAINER_ID.to_string()
}

fn default_label_state() -> Option<LabelState> {
    Some(LabelState::Hide)
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            graph_type: GraphType::default(),
            container_prefix: default_container_prefix(),
            duplicate_policy: DuplicatePolicy::default(),
            label_state: default_label_state(),
            modes: HashMap::new(),
        }
    }
}

/// Adjustments to one mode
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModeRules {
    /// Behaviors removed from the mode
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl EditorConfig {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read editor config {:?}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: EditorConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Empty registry honoring the configured duplicate policy
    pub fn registry(&self) -> BehaviorRegistry {
        BehaviorRegistry::with_policy(self.duplicate_policy)
    }

    /// Override built from the `modes` section, if it has any rules
    pub fn mode_override(&self) -> Option<ConfiguredModes> {
        if self.modes.values().all(|rules| rules.exclude.is_empty()) {
            return None;
        }
        Some(ConfiguredModes {
            rules: self.modes.clone(),
        })
    }
}

/// [`ModeOverride`] driven by configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredModes {
    rules: HashMap<String, ModeRules>,
}

impl ConfiguredModes {
    pub fn new(rules: HashMap<String, ModeRules>) -> Self {
        Self { rules }
    }
}

impl ModeOverride for ConfiguredModes {
    fn apply(&self, mode: &str, defaults: &BindingSet) -> Vec<BehaviorBinding> {
        let Some(rules) = self.rules.get(mode) else {
            return defaults.to_vec();
        };
        defaults
            .iter()
            .filter(|binding| !rules.exclude.contains(&binding.behavior))
            .cloned()
            .collect()
    }
}
