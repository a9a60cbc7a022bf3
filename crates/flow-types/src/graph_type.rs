//! Editor flavors sharing one behavior registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor flavor.
///
/// Behaviors registered without a graph type apply to every flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphType {
    /// Flow chart editor (nodes, edges, anchors).
    #[default]
    Flow,
    /// Mind map editor (tree layout).
    Mind,
}

impl GraphType {
    /// Get the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Flow => "flow",
            GraphType::Mind => "mind",
        }
    }

    /// Get all known graph types.
    pub fn all() -> &'static [GraphType] {
        &[GraphType::Flow, GraphType::Mind]
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
