//! Command-line argument definitions for the Trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the generated sample topology, the
//! layout strategy, canvas dimensions, output path, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Trellis layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sample topology shape (star, ring, mesh, chain, tree)
    #[arg(default_value = "mesh", help = "Sample topology shape to generate")]
    pub sample: String,

    /// Number of nodes in the generated topology
    #[arg(short, long, default_value_t = 12)]
    pub nodes: usize,

    /// Layout strategy tag (force, hierarchical, circular, grid, tree, manual);
    /// unrecognized tags fall back to manual passthrough
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Canvas width in layout units
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Canvas height in layout units
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// RNG seed for reproducible generation and placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the output JSON file, or "-" for stdout
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
