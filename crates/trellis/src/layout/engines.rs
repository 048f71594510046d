//! Layout engine factory module
//!
//! This module provides a system for selecting and using the different
//! layout engines behind a common trait. The module uses a builder pattern
//! for creating and configuring engines; engines are cached per strategy so
//! repeated calls with the same builder reuse them.

mod circular;
mod force;
mod grid;
mod hierarchical;
mod manual;
mod tree;

use std::collections::HashMap;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use trellis_core::{
    geometry::{Bounds, Point, Size},
    strategy::LayoutStrategy,
    topology::{Node, Topology},
};

use crate::config::LayoutConfig;

/// Trait defining the interface for topology layout engines.
pub trait StrategyEngine {
    /// Compute positions for every node of the topology.
    ///
    /// Implementations return fresh nodes with positions populated and must
    /// not rely on any state between calls. Edges are read-only input.
    fn compute(&self, topology: &Topology, canvas: Size) -> Vec<Node>;
}

/// Builder for creating and configuring layout engines.
///
/// Configuration applies to engines created after the corresponding
/// `with_*` call; engines are constructed lazily on first use of their
/// strategy and cached for reuse.
pub struct EngineBuilder {
    // Cache for reusing engines with the same configuration
    engines: HashMap<LayoutStrategy, Box<dyn StrategyEngine>>,

    // Configuration options
    force_iterations: usize,
    damping_factor: f32,
    margin: f32,
    seed: Option<u64>,
}

impl EngineBuilder {
    /// Create a new engine builder with default configuration.
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
            force_iterations: 100,
            damping_factor: 0.9,
            margin: 20.0,
            seed: None,
        }
    }

    /// Create an engine builder from a layout configuration section.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let mut builder = Self::new()
            .with_force_iterations(config.force_iterations())
            .with_damping_factor(config.damping_factor())
            .with_margin(config.margin());
        if let Some(seed) = config.seed() {
            builder = builder.with_seed(seed);
        }
        builder
    }

    /// Set the number of iterations for the force simulation.
    pub fn with_force_iterations(mut self, iterations: usize) -> Self {
        self.force_iterations = iterations;
        self
    }

    /// Set the velocity damping factor for the force simulation.
    pub fn with_damping_factor(mut self, factor: f32) -> Self {
        self.damping_factor = factor;
        self
    }

    /// Set the canvas margin nodes are kept inside.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Fix the RNG seed so randomized placement becomes reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the engine for the given strategy, creating it if necessary.
    pub fn engine(&mut self, strategy: LayoutStrategy) -> &dyn StrategyEngine {
        let engine = self.engines.entry(strategy).or_insert_with(|| {
            let engine: Box<dyn StrategyEngine> = match strategy {
                LayoutStrategy::Force => {
                    let mut e = force::Engine::new();
                    e.set_iterations(self.force_iterations);
                    e.set_damping_factor(self.damping_factor);
                    e.set_margin(self.margin);
                    e.set_seed(self.seed);
                    Box::new(e)
                }
                LayoutStrategy::Hierarchical => {
                    let mut e = hierarchical::Engine::new();
                    e.set_margin(self.margin);
                    e.set_seed(self.seed);
                    Box::new(e)
                }
                LayoutStrategy::Circular => Box::new(circular::Engine::new()),
                LayoutStrategy::Grid => Box::new(grid::Engine::new()),
                LayoutStrategy::Tree => Box::new(tree::Engine::new()),
                LayoutStrategy::Manual => {
                    let mut e = manual::Engine::new();
                    e.set_margin(self.margin);
                    e.set_seed(self.seed);
                    Box::new(e)
                }
            };
            engine
        });
        // Dereference to avoid returning reference to temporary
        &**engine
    }

    /// Run the engine for the given strategy over a topology.
    pub fn compute(
        &mut self,
        topology: &Topology,
        canvas: Size,
        strategy: LayoutStrategy,
    ) -> Vec<Node> {
        debug!(
            strategy:% = strategy,
            node_count = topology.node_count(),
            edge_count = topology.edge_count();
            "Computing layout"
        );
        self.engine(strategy).compute(topology, canvas)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the RNG an engine draws from: seeded when reproducibility was
/// requested, OS entropy otherwise.
pub(crate) fn engine_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Draws a uniformly random point inside the bounds.
pub(crate) fn random_point(rng: &mut StdRng, bounds: Bounds) -> Point {
    Point::new(
        rng.random_range(bounds.min_x()..=bounds.max_x()),
        rng.random_range(bounds.min_y()..=bounds.max_y()),
    )
}
