//! Manual passthrough engine

use trellis_core::{
    geometry::Size,
    topology::{Node, Topology},
};

use crate::layout::engines::{StrategyEngine, engine_rng, random_point};

/// Manual passthrough engine.
///
/// Keeps caller-supplied positions verbatim and randomizes only the nodes
/// that have none, so a partially hand-positioned topology stays put. This
/// engine is also the fallback for unrecognized strategy tags.
pub struct Engine {
    margin: f32,
    seed: Option<u64>,
}

impl Engine {
    /// Create a new manual passthrough engine.
    pub fn new() -> Self {
        Self {
            margin: 20.0,
            seed: None,
        }
    }

    /// Set the canvas margin used when randomizing absent positions
    pub fn set_margin(&mut self, margin: f32) -> &mut Self {
        self.margin = margin;
        self
    }

    /// Fix the RNG seed for reproducible placement of absent positions
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
        let mut rng = engine_rng(self.seed);
        let usable = canvas.to_bounds().inset(self.margin);

        topology
            .nodes()
            .map(|node| match node.position() {
                Some(_) => node.clone(),
                None => node.clone().with_position(random_point(&mut rng, usable)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::geometry::Point;

    use super::*;

    fn canvas() -> Size {
        Size::new(800.0, 600.0)
    }

    fn engine() -> Engine {
        let mut engine = Engine::new();
        engine.set_seed(Some(42));
        engine
    }

    #[test]
    fn test_empty_topology() {
        assert!(engine().compute(&Topology::new(), canvas()).is_empty());
    }

    #[test]
    fn test_existing_positions_kept_verbatim() {
        let mut topology = Topology::new();
        topology
            .insert_node(Node::new("pinned", "Pinned", "host").with_position(Point::new(5.0, 5.0)));

        let placed = engine().compute(&topology, canvas());
        // Even positions outside the margins pass through untouched.
        assert_eq!(placed[0].position(), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_absent_positions_randomized_inside_margins() {
        let mut topology = Topology::new();
        topology.insert_node(Node::new("free", "Free", "host"));

        let placed = engine().compute(&topology, canvas());
        let position = placed[0].position().expect("position should be set");
        assert!(canvas().to_bounds().inset(20.0).contains(position));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut topology = Topology::new();
        topology.insert_node(Node::new("a", "A", "host"));
        topology.insert_node(Node::new("b", "B", "host"));

        let first = engine().compute(&topology, canvas());
        let second = engine().compute(&topology, canvas());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.position(), b.position());
        }
    }
}
