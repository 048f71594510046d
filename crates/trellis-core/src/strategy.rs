//! Layout strategy selection.
//!
//! This module defines [`LayoutStrategy`], the enumeration of available
//! layout algorithms. Selecting a strategy is stateless: it does not mutate
//! the topology, it only chooses which engine produces new positions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};

/// Available layout strategies controlling automatic node positioning.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Force` - Force-directed spring embedder (default)
/// - `Hierarchical` - BFS-levelled layered layout
/// - `Circular` - Even spacing around a circle
/// - `Grid` - Row-major grid of cell centers
/// - `Tree` - Rooted tree with recursive width bands
/// - `Manual` - Passthrough: keep existing positions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Force-directed layout (default)
    #[default]
    Force,
    /// Hierarchical BFS-level layout
    Hierarchical,
    /// Circular layout
    Circular,
    /// Grid layout
    Grid,
    /// Rooted tree layout
    Tree,
    /// Manual passthrough, no automatic positioning
    Manual,
}

impl LayoutStrategy {
    /// Parses a strategy tag, falling back to [`LayoutStrategy::Manual`].
    ///
    /// Unrecognized tags select the manual passthrough: existing positions
    /// are kept (or randomized if absent) rather than failing the call. A
    /// warning is logged so typos do not go unnoticed.
    pub fn from_tag(tag: &str) -> Self {
        match tag.parse() {
            Ok(strategy) => strategy,
            Err(_) => {
                warn!(tag; "Unknown layout strategy tag, using manual passthrough");
                Self::Manual
            }
        }
    }

    /// Returns all selectable strategies, in display order.
    pub fn all() -> [Self; 6] {
        [
            Self::Force,
            Self::Hierarchical,
            Self::Circular,
            Self::Grid,
            Self::Tree,
            Self::Manual,
        ]
    }
}

impl FromStr for LayoutStrategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "force" => Ok(Self::Force),
            "hierarchical" => Ok(Self::Hierarchical),
            "circular" => Ok(Self::Circular),
            "grid" => Ok(Self::Grid),
            "tree" => Ok(Self::Tree),
            "manual" => Ok(Self::Manual),
            _ => Err("Unsupported layout strategy"),
        }
    }
}

impl From<LayoutStrategy> for &'static str {
    fn from(val: LayoutStrategy) -> Self {
        match val {
            LayoutStrategy::Force => "force",
            LayoutStrategy::Hierarchical => "hierarchical",
            LayoutStrategy::Circular => "circular",
            LayoutStrategy::Grid => "grid",
            LayoutStrategy::Tree => "tree",
            LayoutStrategy::Manual => "manual",
        }
    }
}

impl Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for strategy in LayoutStrategy::all() {
            let tag = strategy.to_string();
            assert_eq!(tag.parse::<LayoutStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("orbital".parse::<LayoutStrategy>().is_err());
        assert!("".parse::<LayoutStrategy>().is_err());
        // Tags are case-sensitive snake_case.
        assert!("Force".parse::<LayoutStrategy>().is_err());
    }

    #[test]
    fn test_from_tag_falls_back_to_manual() {
        assert_eq!(LayoutStrategy::from_tag("grid"), LayoutStrategy::Grid);
        assert_eq!(LayoutStrategy::from_tag("orbital"), LayoutStrategy::Manual);
    }

    #[test]
    fn test_default_is_force() {
        assert_eq!(LayoutStrategy::default(), LayoutStrategy::Force);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&LayoutStrategy::Hierarchical).expect("serialize");
        assert_eq!(json, "\"hierarchical\"");

        let parsed: LayoutStrategy = serde_json::from_str("\"tree\"").expect("deserialize");
        assert_eq!(parsed, LayoutStrategy::Tree);
    }
}
