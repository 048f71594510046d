//! Configuration types for Trellis layout runs.
//!
//! This module provides configuration structures that control how layouts
//! are computed. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and canvas settings.
//! - [`LayoutConfig`] - Strategy selection and engine tuning knobs.
//! - [`CanvasConfig`] - Default canvas dimensions.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().size().width(), 800.0);
//! ```

use serde::Deserialize;

use trellis_core::{geometry::Size, strategy::LayoutStrategy};

/// Top-level configuration combining layout and canvas settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(layout: LayoutConfig, canvas: CanvasConfig) -> Self {
        Self { layout, canvas }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }
}

fn default_force_iterations() -> usize {
    100
}

fn default_damping_factor() -> f32 {
    0.9
}

fn default_margin() -> f32 {
    20.0
}

/// Strategy selection and engine tuning knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Default [`LayoutStrategy`] when the caller does not pick one.
    #[serde(default)]
    strategy: LayoutStrategy,

    /// Iteration budget for the force simulation.
    #[serde(default = "default_force_iterations")]
    force_iterations: usize,

    /// Velocity damping factor for the force simulation.
    #[serde(default = "default_damping_factor")]
    damping_factor: f32,

    /// Canvas margin nodes are kept inside.
    #[serde(default = "default_margin")]
    margin: f32,

    /// Optional RNG seed for reproducible randomized placement.
    #[serde(default)]
    seed: Option<u64>,
}

impl LayoutConfig {
    /// Returns the default layout strategy.
    pub fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    /// Returns the force simulation iteration budget.
    pub fn force_iterations(&self) -> usize {
        self.force_iterations
    }

    /// Returns the force simulation damping factor.
    pub fn damping_factor(&self) -> f32 {
        self.damping_factor
    }

    /// Returns the canvas margin.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the RNG seed, if one is configured.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::default(),
            force_iterations: default_force_iterations(),
            damping_factor: default_damping_factor(),
            margin: default_margin(),
            seed: None,
        }
    }
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

/// Default canvas dimensions for layout runs.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in layout units.
    #[serde(default = "default_width")]
    width: f32,

    /// Canvas height in layout units.
    #[serde(default = "default_height")]
    height: f32,
}

impl CanvasConfig {
    /// Returns the configured canvas dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.layout().strategy(), LayoutStrategy::Force);
        assert_eq!(config.layout().force_iterations(), 100);
        assert_eq!(config.layout().damping_factor(), 0.9);
        assert_eq!(config.layout().margin(), 20.0);
        assert_eq!(config.layout().seed(), None);
        assert_eq!(config.canvas().size(), Size::new(800.0, 600.0));
    }
}
