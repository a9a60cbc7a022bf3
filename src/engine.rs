//! Contract with the external rendering engine.

use flow_behavior::ModeConfig;
use flow_types::GraphData;

/// Error returned by an engine constructor, passed through uninterpreted.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// Everything the engine constructor needs.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Id of the container element the engine renders into.
    pub container: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Mode name → ordered behavior bindings.
    pub modes: ModeConfig,
}

/// A rendering engine able to build graph instances.
pub trait GraphEngine {
    type Instance: GraphInstance;

    /// Build a graph instance. Failure is fatal to initialization.
    fn construct(&self, options: EngineOptions) -> Result<Self::Instance, EngineError>;
}

/// A live graph owned by the host.
pub trait GraphInstance {
    /// Load data for the first time.
    fn read(&mut self, data: &GraphData);

    /// Replace the loaded data.
    fn change_data(&mut self, data: &GraphData);

    /// Resize the drawing surface.
    fn change_size(&mut self, width: u32, height: u32);
}
