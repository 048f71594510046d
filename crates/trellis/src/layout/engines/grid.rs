//! Grid layout engine

use trellis_core::{
    geometry::{Point, Size},
    topology::{Node, Topology},
};

use crate::layout::engines::StrategyEngine;

/// Grid layout engine.
///
/// Nodes fill a `ceil(sqrt(n))`-column grid in row-major input order; each
/// node sits at the center of its cell and the cells span the whole canvas.
#[derive(Default)]
pub struct Engine;

impl Engine {
    /// Create a new grid layout engine.
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

        let columns = (node_count as f32).sqrt().ceil() as usize;
        let rows = node_count.div_ceil(columns);
        let cell_width = canvas.width() / columns as f32;
        let cell_height = canvas.height() / rows as f32;

        topology
            .nodes()
            .enumerate()
            .map(|(index, node)| {
                let column = index % columns;
                let row = index / columns;
                let position = Point::new(
                    cell_width * (column as f32 + 0.5),
                    cell_height * (row as f32 + 0.5),
                );
                node.clone().with_position(position)
            })
            .collect()
    }
}
