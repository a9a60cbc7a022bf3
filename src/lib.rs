//! Flow editor interaction core
//!
//! Wires the behavior registry and mode composer (`flow-behavior`) to an
//! external rendering engine, and prepares caller data before the engine
//! reads it.
//!
//! # Architecture
//!
//! ```text
//! GraphHost (container: size + data)
//!    │ mount(width, height)
//!    ├──► FlowEditor::parse_data ──► normalize (assign missing ids)
//!    └──► FlowEditor::init_graph
//!              │
//!              ▼
//!         ModeComposer::compose ──► ModeConfig
//!              │
//!              ▼
//!         GraphEngine::construct(EngineOptions) ──► GraphInstance
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut registry = BehaviorRegistry::new();
//! registry.install(&FlowBehaviors)?;
//!
//! let editor = FlowEditor::new(Arc::new(registry));
//! let mut host = GraphHost::new(editor, engine, data);
//! host.mount(800, 600)?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod logging;
pub mod normalize;

pub use bootstrap::{initialize, FlowEditor};
pub use config::{ConfiguredModes, EditorConfig, ModeRules};
pub use engine::{EngineError, EngineOptions, GraphEngine, GraphInstance};
pub use error::EditorError;
pub use host::GraphHost;
pub use normalize::{normalize, normalize_with, IdGenerator, UuidIdGenerator};

pub use flow_behavior::{
    BehaviorBinding, BehaviorDescriptor, BehaviorError, BehaviorHandler, BehaviorModule,
    BehaviorRegistry, BindingSet, DuplicatePolicy, FlowBehaviors, GesturePhase, ModeComposer,
    ModeConfig, ModeOverride,
};
pub use flow_types::{
    GraphData, GraphElement, GraphEvent, GraphType, LabelState, UiState, UiStateHandle,
    DEFAULT_MODE, FLOW_CONTAINER_ID,
};
