//! Layout computation for topologies.
//!
//! The entry points are [`apply_layout`] for one-shot use with default
//! settings, and [`EngineBuilder`] when the engines need configuring
//! (iteration counts, margins, a fixed RNG seed).

mod engines;

pub(crate) use engines::{engine_rng, random_point};
pub use engines::{EngineBuilder, StrategyEngine};

use trellis_core::{
    geometry::Size,
    strategy::LayoutStrategy,
    topology::{Node, Topology},
};

/// Computes positions for every node of a topology.
///
/// Returns a new node list with `x`/`y` populated, in the topology's input
/// order; the input topology and its edges are never mutated. An empty
/// topology yields an empty list. The tree strategy is the one exception to
/// the cardinality rule: it returns only the nodes reachable from its chosen
/// root.
///
/// This is shorthand for running a default [`EngineBuilder`]; callers that
/// need reproducible force layouts or custom margins should configure a
/// builder instead.
///
/// # Arguments
///
/// * `topology` - The nodes and edges to lay out
/// * `canvas` - Target canvas dimensions (positive width and height)
/// * `strategy` - Which layout algorithm to run
///
/// # Examples
///
/// ```
/// use trellis::{
///     apply_layout,
///     geometry::Size,
///     strategy::LayoutStrategy,
///     topology::{Edge, Node, Topology},
/// };
///
/// let mut topology = Topology::new();
/// topology.insert_node(Node::new("gw", "Gateway", "router"));
/// topology.insert_node(Node::new("web", "Web server", "server"));
/// topology.insert_edge(Edge::new("uplink", "gw", "web", "link"));
///
/// let placed = apply_layout(&topology, Size::new(800.0, 600.0), LayoutStrategy::Grid);
///
/// assert_eq!(placed.len(), 2);
/// assert!(placed.iter().all(|node| node.position().is_some()));
/// ```
pub fn apply_layout(topology: &Topology, canvas: Size, strategy: LayoutStrategy) -> Vec<Node> {
    EngineBuilder::new().compute(topology, canvas, strategy)
}
