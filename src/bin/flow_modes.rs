//! Flow mode inspector
//!
//! Composes the editor modes from the stock behaviors and an editor YAML
//! config, and prints the result as JSON.
//!
//! Usage:
//!   cargo run --features cli --bin flow_modes -- --config editor.yaml
//!   cargo run --features cli --bin flow_modes -- --graph-type mind --label-state show

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use flow_editor::{
    logging, EditorConfig, FlowBehaviors, FlowEditor, GesturePhase, GraphEvent, GraphType,
    LabelState, DEFAULT_MODE,
};

/// Print the composed behavior modes for an editor configuration
#[derive(Parser, Debug)]
#[command(name = "flow_modes")]
#[command(about = "Inspect composed behavior modes")]
struct Args {
    /// Editor config YAML
    #[arg(long, short = 'c', env = "FLOW_EDITOR_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured graph type
    #[arg(long, short = 'g', value_parser = parse_graph_type)]
    graph_type: Option<GraphType>,

    /// Override the configured label state (hide | show)
    #[arg(long, short = 'l', value_parser = parse_label_state)]
    label_state: Option<LabelState>,

    /// Skip the stock behavior module
    #[arg(long)]
    bare: bool,
}

fn parse_graph_type(s: &str) -> Result<GraphType, String> {
    GraphType::all()
        .iter()
        .copied()
        .find(|ty| ty.as_str() == s)
        .ok_or_else(|| format!("Unknown graph type: {}", s))
}

fn parse_label_state(s: &str) -> Result<LabelState, String> {
    match s {
        "hide" => Ok(LabelState::Hide),
        "show" => Ok(LabelState::Show),
        other => Err(format!("Unknown label state: {}", other)),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init("flow_editor=info,flow_behavior=info");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    if let Some(graph_type) = args.graph_type {
        config.graph_type = graph_type;
    }
    if let Some(label_state) = args.label_state {
        config.label_state = Some(label_state);
    }

    let mut registry = config.registry();
    if !args.bare {
        registry
            .install(&FlowBehaviors)
            .context("Failed to install stock behaviors")?;
    }

    let editor = FlowEditor::from_config(Arc::new(registry), &config);
    let modes = editor.modes().context("Failed to compose modes")?;

    let canvas = GraphEvent::on_canvas();
    let permitted: Vec<_> = modes
        .behavior_names(DEFAULT_MODE)
        .into_iter()
        .filter(|name| modes.permits(DEFAULT_MODE, name, GesturePhase::Begin, &canvas))
        .collect();

    let report = json!({
        "container": editor.container_id(),
        "graph_type": editor.graph_type(),
        "label_state": config.label_state,
        "modes": modes.summary(),
        "canvas_begin_permitted": permitted,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
