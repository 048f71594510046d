//! CLI logic for the Trellis layout tool.
//!
//! This module contains the core CLI logic for the Trellis layout tool:
//! generate a sample topology, apply the selected layout strategy, and write
//! the positioned nodes as JSON.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use trellis::{
    EngineBuilder, TrellisError,
    geometry::Size,
    sample::{self, SampleShape},
    strategy::LayoutStrategy,
};

/// Run the Trellis CLI application
///
/// This function generates a sample topology, runs the configured layout
/// strategy over it, and writes the result to the output target.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - Configuration loading errors
/// - Unknown sample shapes
/// - File I/O errors
/// - Output serialization errors
pub fn run(args: &Args) -> Result<(), TrellisError> {
    info!(
        sample = args.sample,
        node_count = args.nodes,
        output_path = args.output;
        "Laying out sample topology"
    );

    // Load configuration; CLI flags override config values
    let app_config = config::load_config(args.config.as_ref())?;

    let shape: SampleShape = args
        .sample
        .parse()
        .map_err(|_| TrellisError::Config(format!("Unknown sample shape: {}", args.sample)))?;

    // Unrecognized strategy tags degrade to manual passthrough by contract
    let strategy = match args.strategy.as_deref() {
        Some(tag) => LayoutStrategy::from_tag(tag),
        None => app_config.layout().strategy(),
    };

    let configured = app_config.canvas().size();
    let canvas = Size::new(
        args.width.map(|w| w as f32).unwrap_or(configured.width()),
        args.height.map(|h| h as f32).unwrap_or(configured.height()),
    );

    let seed = args.seed.or(app_config.layout().seed());
    if seed.is_none() && strategy == LayoutStrategy::Force {
        warn!("No seed given; force layout output will differ between runs");
    }

    let topology = sample::generate(shape, args.nodes, seed);
    info!(
        shape:% = shape,
        node_count = topology.node_count(),
        edge_count = topology.edge_count();
        "Sample topology generated"
    );

    let mut builder = EngineBuilder::from_config(app_config.layout());
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }

    let placed = builder.compute(&topology, canvas, strategy);
    info!(
        strategy:% = strategy,
        placed_count = placed.len();
        "Layout computed"
    );

    let json = serde_json::to_string_pretty(&placed)
        .map_err(|err| TrellisError::Output(Box::new(err)))?;

    if args.output == "-" {
        println!("{json}");
    } else {
        fs::write(&args.output, json)?;
        info!(output_file = args.output; "Layout written successfully");
    }

    Ok(())
}
