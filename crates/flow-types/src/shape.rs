//! Class names attached to rendered shapes.

use serde::{Deserialize, Serialize};

/// Class name carried by a shape inside a node group.
///
/// Gesture gates inspect the class of the event target to tell, for example,
/// an anchor point apart from the node body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeClassName {
    #[serde(rename = "node-label")]
    Label,
    #[serde(rename = "node-keyShape")]
    KeyShape,
    #[serde(rename = "node-wrapper")]
    Wrapper,
    #[serde(rename = "node-appendix")]
    Appendix,
    #[serde(rename = "node-anchor")]
    Anchor,
}

impl ShapeClassName {
    /// Get the class name string as stored on the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeClassName::Label => "node-label",
            ShapeClassName::KeyShape => "node-keyShape",
            ShapeClassName::Wrapper => "node-wrapper",
            ShapeClassName::Appendix => "node-appendix",
            ShapeClassName::Anchor => "node-anchor",
        }
    }

    /// Check whether a raw class name refers to this shape class.
    pub fn matches(&self, class_name: &str) -> bool {
        self.as_str() == class_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&ShapeClassName::Anchor).unwrap();
        assert_eq!(json, format!("\"{}\"", ShapeClassName::Anchor.as_str()));
    }

    #[test]
    fn matches_exact_class_only() {
        assert!(ShapeClassName::Anchor.matches("node-anchor"));
        assert!(!ShapeClassName::Anchor.matches("node-label"));
        assert!(!ShapeClassName::Anchor.matches(""));
    }
}
