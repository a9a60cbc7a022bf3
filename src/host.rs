//! Generic graph container
//!
//! Owns the caller's data and the editor, and drives the editor through the
//! container lifecycle: measure → parse data → init graph → read data.

use flow_types::GraphData;
use tracing::debug;

use crate::bootstrap::FlowEditor;
use crate::engine::{GraphEngine, GraphInstance};
use crate::error::EditorError;

/// Container hosting one editor and its engine instance.
pub struct GraphHost<E: GraphEngine> {
    editor: FlowEditor,
    engine: E,
    data: GraphData,
    graph: Option<E::Instance>,
}

impl<E: GraphEngine> GraphHost<E> {
    pub fn new(editor: FlowEditor, engine: E, data: GraphData) -> Self {
        Self {
            editor,
            engine,
            data,
            graph: None,
        }
    }

    /// Called once the container has been measured.
    ///
    /// Mounting an already mounted host only resizes it.
    pub fn mount(&mut self, width: u32, height: u32) -> Result<(), EditorError> {
        if self.graph.is_some() {
            self.resize(width, height);
            return Ok(());
        }

        self.editor.parse_data(&mut self.data);
        let mut graph = self.editor.init_graph(&self.engine, width, height)?;
        graph.read(&self.data);
        self.graph = Some(graph);

        debug!(
            "Mounted '{}' with {} nodes, {} edges",
            self.editor.container_id(),
            self.data.nodes.len(),
            self.data.edges.len()
        );
        Ok(())
    }

    /// Replace the data. Forwarded to the engine when mounted.
    pub fn set_data(&mut self, mut data: GraphData) {
        self.editor.parse_data(&mut data);
        self.data = data;
        if let Some(graph) = self.graph.as_mut() {
            graph.change_data(&self.data);
        }
    }

    /// Container size changed.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(graph) = self.graph.as_mut() {
            graph.change_size(width, height);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.graph.is_some()
    }

    pub fn editor(&self) -> &FlowEditor {
        &self.editor
    }

    pub fn data(&self) -> &GraphData {
        &self.data
    }

    pub fn graph(&self) -> Option<&E::Instance> {
        self.graph.as_ref()
    }

    pub fn graph_mut(&mut self) -> Option<&mut E::Instance> {
        self.graph.as_mut()
    }
}
