//! Stock behaviors shipped with the flow editor.
//!
//! Installed through [`FlowBehaviors`]; hosts that want a different set
//! register their own module instead.

use std::sync::Arc;

use flow_types::{GraphEvent, GraphType, ShapeClassName};

use crate::error::BehaviorError;
use crate::gate::can_drag_node;
use crate::handler::{BehaviorHandler, PassiveHandler};
use crate::registry::{BehaviorModule, BehaviorRegistry};

pub const CLICK_ITEM: &str = "click-item";
pub const HOVER_ITEM: &str = "hover-item";
pub const DRAG_NODE: &str = "drag-node";
pub const DRAG_ADD_EDGE: &str = "drag-add-edge";
pub const HOVER_ANCHOR: &str = "hover-anchor";

/// Moves nodes, except when the drag starts on an anchor.
#[derive(Debug, Default)]
struct DragNode;

impl BehaviorHandler for DragNode {
    fn events(&self) -> &[&'static str] {
        &["node:dragstart", "node:drag", "node:dragend"]
    }

    fn should_begin(&self, event: &GraphEvent) -> bool {
        can_drag_node(event)
    }
}

/// Draws a new edge, only when the drag starts on an anchor.
#[derive(Debug, Default)]
struct DragAddEdge;

impl BehaviorHandler for DragAddEdge {
    fn events(&self) -> &[&'static str] {
        &["node:mousedown", "mousemove", "mouseup"]
    }

    fn should_begin(&self, event: &GraphEvent) -> bool {
        event
            .target
            .as_ref()
            .is_some_and(|target| target.is(ShapeClassName::Anchor))
    }
}

/// The stock behavior module.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowBehaviors;

impl BehaviorModule for FlowBehaviors {
    fn register(&self, registry: &mut BehaviorRegistry) -> Result<(), BehaviorError> {
        registry.register_behavior(
            CLICK_ITEM,
            None,
            Arc::new(PassiveHandler::new(&["node:click", "edge:click", "canvas:click"])),
        )?;
        registry.register_behavior(
            HOVER_ITEM,
            None,
            Arc::new(PassiveHandler::new(&[
                "node:mouseenter",
                "node:mouseleave",
                "edge:mouseenter",
                "edge:mouseleave",
            ])),
        )?;
        registry.register_behavior(DRAG_NODE, Some(GraphType::Flow), Arc::new(DragNode))?;
        registry.register_behavior(DRAG_ADD_EDGE, Some(GraphType::Flow), Arc::new(DragAddEdge))?;
        registry.register_behavior(
            HOVER_ANCHOR,
            Some(GraphType::Flow),
            Arc::new(PassiveHandler::new(&["anchor:mouseenter", "anchor:mouseleave"])),
        )?;
        Ok(())
    }
}
