//! Directed graph view over a topology.
//!
//! Layout engines that need structural queries (degrees, roots, traversal)
//! work against [`TopologyGraph`] rather than the raw edge list. The view is
//! built once per layout run; edges referencing undefined nodes are dropped
//! here with a diagnostic, so the engines themselves never see them.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;
use log::warn;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use trellis_core::{identifier::Id, topology::Topology};

/// Levels produced by a breadth-first traversal.
///
/// `levels[d]` holds the identifiers discovered at depth `d`, in discovery
/// order. `visited` is the union of all levels; nodes outside it were not
/// reachable from any of the traversal roots.
#[derive(Debug)]
pub struct BfsLevels {
    pub levels: Vec<Vec<Id>>,
    pub visited: HashSet<Id>,
}

/// A petgraph-backed directed view of a [`Topology`].
///
/// Node weights are the node identifiers; edge weights record whether the
/// originating edge was directed. Multi-edges and self-loops survive the
/// conversion unchanged.
pub struct TopologyGraph {
    graph: DiGraph<Id, bool>,
    indices: IndexMap<Id, NodeIndex>,
}

impl TopologyGraph {
    /// Builds the graph view from a topology.
    ///
    /// Edges whose source or target identifier is not in the node set are
    /// skipped with a warning. This keeps the caller contract intact (a
    /// dangling reference is a caller error, not ours to fail on) while
    /// making the degradation observable.
    pub fn from_topology(topology: &Topology) -> Self {
        let mut graph = DiGraph::new();
        let mut indices = IndexMap::with_capacity(topology.node_count());

        for id in topology.node_ids() {
            let node_idx = graph.add_node(id);
            indices.insert(id, node_idx);
        }

        for edge in topology.edges() {
            match (indices.get(&edge.source()), indices.get(&edge.target())) {
                (Some(&source_idx), Some(&target_idx)) => {
                    graph.add_edge(source_idx, target_idx, edge.directed());
                }
                _ => {
                    warn!(
                        edge_id:% = edge.id(),
                        source:% = edge.source(),
                        target:% = edge.target();
                        "Edge references an undefined node, skipping"
                    );
                }
            }
        }

        Self { graph, indices }
    }

    /// Returns the number of nodes in the view.
    pub fn node_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns an iterator over the node identifiers in input order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.indices.keys().copied()
    }

    /// Returns the number of edges arriving at the node.
    pub fn in_degree(&self, id: Id) -> usize {
        self.degree_directed(id, Direction::Incoming)
    }

    /// Returns the number of edges leaving the node.
    pub fn out_degree(&self, id: Id) -> usize {
        self.degree_directed(id, Direction::Outgoing)
    }

    /// Returns the total number of edges incident to the node.
    pub fn degree(&self, id: Id) -> usize {
        self.in_degree(id) + self.out_degree(id)
    }

    fn degree_directed(&self, id: Id, direction: Direction) -> usize {
        match self.indices.get(&id) {
            Some(&node_idx) => self.graph.edges_directed(node_idx, direction).count(),
            None => 0,
        }
    }

    /// Selects traversal roots for level-based layouts.
    ///
    /// Roots are the nodes with no incoming edge, in input order. A graph
    /// without any (cyclic or fully connected) falls back to the nodes with
    /// the highest out-degree, first-encountered winning ties, capped to
    /// three roots.
    pub fn roots(&self) -> Vec<Id> {
        let sources: Vec<Id> = self.ids().filter(|&id| self.in_degree(id) == 0).collect();
        if !sources.is_empty() {
            return sources;
        }

        let mut by_out_degree: Vec<(Id, usize)> = self
            .ids()
            .map(|id| (id, self.out_degree(id)))
            .collect();
        // Stable sort keeps input order among equal degrees.
        by_out_degree.sort_by(|a, b| b.1.cmp(&a.1));
        by_out_degree.truncate(3);
        by_out_degree.into_iter().map(|(id, _)| id).collect()
    }

    /// Assigns BFS depths starting from the given roots.
    ///
    /// All roots are seeded at depth 0 in the order given; a node reachable
    /// from several roots keeps the depth of whichever traversal reaches it
    /// first. Traversal follows edges in their stated direction.
    pub fn bfs_levels(&self, roots: &[Id]) -> BfsLevels {
        let mut levels: Vec<Vec<Id>> = Vec::new();
        let mut visited: HashSet<Id> = HashSet::new();
        let mut queue: VecDeque<(Id, usize)> = VecDeque::new();

        for &root in roots {
            if visited.insert(root) {
                queue.push_back((root, 0));
            }
        }

        while let Some((id, depth)) = queue.pop_front() {
            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            levels[depth].push(id);

            for neighbor in self.successors(id) {
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        BfsLevels { levels, visited }
    }

    /// Returns the targets of the node's outgoing edges, in edge input order.
    pub fn successors(&self, id: Id) -> Vec<Id> {
        let Some(&node_idx) = self.indices.get(&id) else {
            return Vec::new();
        };
        // petgraph walks incident edges newest-first; reverse restores the
        // order the edges were inserted in.
        let mut targets: Vec<Id> = self
            .graph
            .edges_directed(node_idx, Direction::Outgoing)
            .map(|edge| self.graph[edge.target()])
            .collect();
        targets.reverse();
        targets
    }

    /// Returns the neighbors reachable for tree construction.
    ///
    /// Outgoing edges are always followed; undirected edges are additionally
    /// walked backwards. Order: outgoing targets in edge input order, then
    /// undirected sources in edge input order. Self-loops are filtered out.
    pub fn tree_neighbors(&self, id: Id) -> Vec<Id> {
        let Some(&node_idx) = self.indices.get(&id) else {
            return Vec::new();
        };

        let mut outgoing: Vec<Id> = self
            .graph
            .edges_directed(node_idx, Direction::Outgoing)
            .map(|edge| self.graph[edge.target()])
            .collect();
        outgoing.reverse();

        let mut incoming: Vec<Id> = self
            .graph
            .edges_directed(node_idx, Direction::Incoming)
            .filter(|edge| !*edge.weight())
            .map(|edge| self.graph[edge.source()])
            .collect();
        incoming.reverse();

        outgoing
            .into_iter()
            .chain(incoming)
            .filter(|&neighbor| neighbor != id)
            .collect()
    }
}
