//! Circular layout engine

use std::f32::consts::{FRAC_PI_2, TAU};

use trellis_core::{
    geometry::{Point, Size},
    topology::{Node, Topology},
};

use crate::layout::engines::StrategyEngine;

/// Ring radius as a fraction of the smaller canvas dimension.
const RADIUS_FACTOR: f32 = 0.4;

/// Circular layout engine.
///
/// Nodes are spaced evenly around a circle centered in the canvas, in input
/// order starting from twelve o'clock. No attempt is made to reduce edge
/// crossings.
#[derive(Default)]
pub struct Engine;

impl Engine {
    /// Create a new circular layout engine.
    pub fn new() -> Self {
        Self
    }
}

impl StrategyEngine for Engine {
    fn compute(&self, topology: &Topology, canvas: Size) -> Vec<Node> {
        let node_count = topology.node_count();
        if node_count == 0 {
            return Vec::new();
        }

        let center = canvas.center();
        let radius = RADIUS_FACTOR * canvas.min_dimension();
        let step = TAU / node_count as f32;

        topology
            .nodes()
            .enumerate()
            .map(|(index, node)| {
                let angle = step * index as f32 - FRAC_PI_2;
                let position = Point::new(
                    center.x() + radius * angle.cos(),
                    center.y() + radius * angle.sin(),
                );
                node.clone().with_position(position)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn canvas() -> Size {
        Size::new(800.0, 600.0)
    }

    fn topology(node_count: usize) -> Topology {
        let mut topology = Topology::new();
        for i in 0..node_count {
            let id = format!("n{i}");
            topology.insert_node(Node::new(id.as_str(), id.as_str(), "host"));
        }
        topology
    }

    #[test]
    fn test_empty_topology() {
        assert!(Engine::new().compute(&topology(0), canvas()).is_empty());
    }

    #[test]
    fn test_single_node_sits_atop_the_circle() {
        let placed = Engine::new().compute(&topology(1), canvas());
        let position = placed[0].position().expect("position should be set");

        // Center (400, 300), radius 240, first slot at twelve o'clock.
        assert!(approx_eq!(f32, position.x(), 400.0, epsilon = 0.001));
        assert!(approx_eq!(f32, position.y(), 60.0, epsilon = 0.001));
    }

    #[test]
    fn test_all_nodes_on_the_circle() {
        let placed = Engine::new().compute(&topology(7), canvas());
        assert_eq!(placed.len(), 7);

        let center = canvas().center();
        let radius = 0.4 * canvas().min_dimension();
        for node in &placed {
            let position = node.position().expect("position should be set");
            let distance = position.sub_point(center).hypot();
            assert!(approx_eq!(f32, distance, radius, epsilon = 0.01));
        }
    }

    #[test]
    fn test_even_angular_spacing() {
        let placed = Engine::new().compute(&topology(4), canvas());
        let center = canvas().center();
        let radius = 0.4 * canvas().min_dimension();

        // Four nodes from twelve o'clock: top, right, bottom, left.
        let expected = [
            Point::new(center.x(), center.y() - radius),
            Point::new(center.x() + radius, center.y()),
            Point::new(center.x(), center.y() + radius),
            Point::new(center.x() - radius, center.y()),
        ];
        for (node, expected) in placed.iter().zip(expected) {
            let position = node.position().unwrap();
            assert!(approx_eq!(f32, position.x(), expected.x(), epsilon = 0.01));
            assert!(approx_eq!(f32, position.y(), expected.y(), epsilon = 0.01));
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let topology = topology(5);
        let first = Engine::new().compute(&topology, canvas());
        let second = Engine::new().compute(&topology, canvas());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.position(), b.position());
        }
    }
}
