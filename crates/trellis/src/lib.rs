//! Trellis - a layout engine for network topologies.
//!
//! Given a topology (nodes and edges) and target canvas dimensions, Trellis
//! computes 2D positions for every node under one of five strategies: force,
//! hierarchical, circular, grid, or tree, plus a manual passthrough. Every
//! call is self-contained; the engine keeps no state between invocations and
//! never mutates its input.
//!
//! # Examples
//!
//! ```
//! use trellis::{
//!     EngineBuilder,
//!     geometry::Size,
//!     sample::{self, SampleShape},
//!     strategy::LayoutStrategy,
//! };
//!
//! // Generate a reproducible sample topology and lay it out.
//! let topology = sample::generate(SampleShape::Star, 8, Some(7));
//!
//! let mut builder = EngineBuilder::new().with_seed(7);
//! let placed = builder.compute(&topology, Size::new(800.0, 600.0), LayoutStrategy::Force);
//!
//! assert_eq!(placed.len(), 8);
//! assert!(placed.iter().all(|node| node.position().is_some()));
//! ```

pub mod config;
pub mod sample;

mod error;
mod graph;
mod layout;

pub use trellis_core::{geometry, identifier, strategy, topology};

pub use error::TrellisError;
pub use layout::{EngineBuilder, StrategyEngine, apply_layout};
