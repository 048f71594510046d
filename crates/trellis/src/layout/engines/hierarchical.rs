//! Hierarchical layout engine
//!
//! Levels are derived by breadth-first traversal from the topology's roots;
//! each level becomes a horizontal band, with its nodes spaced evenly.

use indexmap::IndexMap;

use trellis_core::{
    geometry::{Point, Size},
    identifier::Id,
    topology::{Node, Topology},
};

use crate::{
    graph::TopologyGraph,
    layout::engines::{StrategyEngine, engine_rng, random_point},
};

/// Hierarchical BFS-level layout engine.
///
/// Root selection: nodes with no incoming edge, falling back to the highest
/// out-degree nodes (capped to three) when the graph is cyclic or fully
/// connected. Nodes reachable from several roots take the level of the
/// traversal that reaches them first; roots are processed in input order,
/// so the assignment is stable for a given topology.
pub struct Engine {
    margin: f32,
    seed: Option<u64>,
}

impl Engine {
    /// Create a new hierarchical layout engine.
    pub fn new() -> Self {
        Self {
            margin: 20.0,
            seed: None,
        }
    }

    /// Set the canvas margin used for the disconnected-node fallback
    pub fn set_margin(&mut self, margin: f32) -> &mut Self {
        self.margin = margin;
        self
    }

    /// Fix the RNG seed for reproducible fallback placement
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyEngine for Engine {
    fn compute(&self, topology: &Topology, canvas: Size) -> Vec<Node> {
        if topology.is_empty() {
            return Vec::new();
        }

        let graph = TopologyGraph::from_topology(topology);
        let roots = graph.roots();
        let bfs = graph.bfs_levels(&roots);

        let level_count = bfs.levels.len();
        let level_height = canvas.height() / level_count as f32;

        let mut positions: IndexMap<Id, Point> = IndexMap::with_capacity(topology.node_count());

        for (depth, level) in bfs.levels.iter().enumerate() {
            let y = level_height * (depth as f32 + 0.5);
            let slots = level.len() as f32 + 1.0;
            for (slot, &node_id) in level.iter().enumerate() {
                let x = canvas.width() * (slot as f32 + 1.0) / slots;
                positions.insert(node_id, Point::new(x, y));
            }
        }

        // Disconnected nodes never show up in the traversal; scatter them
        // rather than dropping them. No non-overlap guarantee here.
        let mut rng = engine_rng(self.seed);
        let usable = canvas.to_bounds().inset(self.margin);

        topology
            .nodes()
            .map(|node| {
                let position = positions
                    .get(&node.id())
                    .copied()
                    .unwrap_or_else(|| random_point(&mut rng, usable));
                node.clone().with_position(position)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use trellis_core::topology::Edge;

    use super::*;

    fn canvas() -> Size {
        Size::new(900.0, 600.0)
    }

    fn engine() -> Engine {
        let mut engine = Engine::new();
        engine.set_seed(Some(42));
        engine
    }

    fn chain_topology() -> Topology {
        let mut topology = Topology::new();
        for id in ["a", "b", "c"] {
            topology.insert_node(Node::new(id, id, "host"));
        }
        topology.insert_edge(Edge::new("e0", "a", "b", "link"));
        topology.insert_edge(Edge::new("e1", "b", "c", "link"));
        topology
    }

    #[test]
    fn test_empty_topology() {
        assert!(engine().compute(&Topology::new(), canvas()).is_empty());
    }

    #[test]
    fn test_chain_levels_and_spacing() {
        // A -> B -> C: levels 0/1/2, one node each, centered horizontally,
        // vertical spacing of height/3.
        let placed = engine().compute(&chain_topology(), canvas());
        assert_eq!(placed.len(), 3);

        let spacing = canvas().height() / 3.0;
        for (index, node) in placed.iter().enumerate() {
            let position = node.position().expect("position should be set");
            assert!(approx_eq!(f32, position.x(), 450.0));
            let expected_y = spacing * (index as f32 + 0.5);
            assert!(approx_eq!(f32, position.y(), expected_y, epsilon = 0.001));
        }
    }

    #[test]
    fn test_level_nodes_spread_evenly() {
        // One root fanning out to three children: children sit at 1/4, 2/4,
        // and 3/4 of the width on the second band.
        let mut topology = Topology::new();
        for id in ["hub", "a", "b", "c"] {
            topology.insert_node(Node::new(id, id, "host"));
        }
        for (i, target) in ["a", "b", "c"].iter().enumerate() {
            topology.insert_edge(Edge::new(format!("e{i}").as_str(), "hub", *target, "link"));
        }

        let placed = engine().compute(&topology, canvas());
        let xs: Vec<f32> = placed[1..]
            .iter()
            .map(|node| node.position().unwrap().x())
            .collect();

        assert!(approx_eq!(f32, xs[0], 225.0));
        assert!(approx_eq!(f32, xs[1], 450.0));
        assert!(approx_eq!(f32, xs[2], 675.0));
    }

    #[test]
    fn test_edgeless_topology_is_single_level() {
        let mut topology = Topology::new();
        for id in ["a", "b"] {
            topology.insert_node(Node::new(id, id, "host"));
        }

        let placed = engine().compute(&topology, canvas());
        for node in &placed {
            assert!(approx_eq!(
                f32,
                node.position().unwrap().y(),
                canvas().height() / 2.0
            ));
        }
    }

    #[test]
    fn test_cycle_falls_back_to_out_degree_roots() {
        let mut topology = Topology::new();
        for id in ["a", "b", "c"] {
            topology.insert_node(Node::new(id, id, "host"));
        }
        topology.insert_edge(Edge::new("e0", "a", "b", "link"));
        topology.insert_edge(Edge::new("e1", "b", "c", "link"));
        topology.insert_edge(Edge::new("e2", "c", "a", "link"));

        let placed = engine().compute(&topology, canvas());
        assert_eq!(placed.len(), 3);
        assert!(placed.iter().all(|node| node.position().is_some()));
    }

    #[test]
    fn test_disconnected_nodes_get_fallback_positions() {
        let mut topology = chain_topology();
        topology.insert_node(Node::new("island", "Island", "host"));

        let placed = engine().compute(&topology, canvas());
        assert_eq!(placed.len(), 4);

        let island = placed
            .iter()
            .find(|node| node.id() == "island")
            .expect("island should be present");
        let position = island.position().expect("position should be set");
        assert!(position.is_finite());
        assert!(canvas().to_bounds().contains(position));
    }

    #[test]
    fn test_deterministic_for_connected_graphs() {
        let first = engine().compute(&chain_topology(), canvas());
        let second = engine().compute(&chain_topology(), canvas());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.position(), b.position());
        }
    }
}
