//! Tree layout engine

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use trellis_core::{
    geometry::{Point, Size},
    identifier::Id,
    topology::{Node, Topology},
};

use crate::{graph::TopologyGraph, layout::engines::StrategyEngine};

/// A node of the derived rooted tree.
struct TreeNode {
    id: Id,
    children: Vec<TreeNode>,
}

/// Rooted tree layout engine.
///
/// The root is the node with the highest combined in+out degree (first in
/// input order on ties). A rooted tree is derived by walking neighbors from
/// the root with a visited guard, then positioned recursively: the root is
/// centered in its width band on the top row, and children split the parent
/// band evenly one row further down.
///
/// Nodes that the walk never reaches (disconnected components, or nodes only
/// reachable through an already-visited one) are *dropped from the output*;
/// the result is exactly the root's reachable set. Callers that need every
/// node positioned should pick another strategy for non-tree-shaped input.
#[derive(Default)]
pub struct Engine;

impl Engine {
    /// Create a new tree layout engine.
    pub fn new() -> Self {
        Self
    }

    /// Derive the rooted tree under `id`, claiming nodes first-visit-wins.
    fn build_subtree(graph: &TopologyGraph, id: Id, visited: &mut HashSet<Id>) -> TreeNode {
        // Claim all children before recursing so an earlier sibling's
        // subtree cannot swallow a later sibling.
        let claimed: Vec<Id> = graph
            .tree_neighbors(id)
            .into_iter()
            .filter(|&neighbor| visited.insert(neighbor))
            .collect();

        let children = claimed
            .into_iter()
            .map(|child| Self::build_subtree(graph, child, visited))
            .collect();

        TreeNode { id, children }
    }

    /// Height of the tree in rows.
    fn depth(node: &TreeNode) -> usize {
        1 + node
            .children
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Center each node in its width band, children splitting the band.
    fn place(
        node: &TreeNode,
        band: (f32, f32),
        level: usize,
        level_height: f32,
        positions: &mut IndexMap<Id, Point>,
    ) {
        let (band_min, band_max) = band;
        let position = Point::new(
            (band_min + band_max) / 2.0,
            level_height * (level as f32 + 0.5),
        );
        positions.insert(node.id, position);

        if node.children.is_empty() {
            return;
        }

        let slot_width = (band_max - band_min) / node.children.len() as f32;
        for (slot, child) in node.children.iter().enumerate() {
            let child_min = band_min + slot_width * slot as f32;
            Self::place(
                child,
                (child_min, child_min + slot_width),
                level + 1,
                level_height,
                positions,
            );
        }
    }
}

impl StrategyEngine for Engine {
    fn compute(&self, topology: &Topology, canvas: Size) -> Vec<Node> {
        if topology.is_empty() {
            return Vec::new();
        }

        let graph = TopologyGraph::from_topology(topology);

        // Root: highest combined degree; first in input order wins ties.
        let mut root = None;
        let mut best_degree = 0;
        for id in graph.ids() {
            let degree = graph.degree(id);
            if root.is_none() || degree > best_degree {
                root = Some(id);
                best_degree = degree;
            }
        }
        let root = root.expect("Non-empty topology must yield a root");

        let mut visited = HashSet::from([root]);
        let tree = Self::build_subtree(&graph, root, &mut visited);

        let level_height = canvas.height() / Self::depth(&tree) as f32;
        let mut positions = IndexMap::with_capacity(visited.len());
        Self::place(
            &tree,
            (0.0, canvas.width()),
            0,
            level_height,
            &mut positions,
        );

        let dropped = topology.node_count() - positions.len();
        if dropped > 0 {
            debug!(
                dropped,
                root:% = root;
                "Tree layout dropped nodes unreachable from the root"
            );
        }

        topology
            .nodes()
            .filter_map(|node| {
                positions
                    .get(&node.id())
                    .map(|&position| node.clone().with_position(position))
            })
            .collect()
    }
}
