//! Force-directed layout engine
//!
//! This module implements a spring-embedder in the Fruchterman-Reingold
//! style: every node pair repels, every edge attracts, and positions are
//! integrated with damped velocities for a fixed number of iterations.

use indexmap::IndexMap;

use trellis_core::{
    geometry::{Point, Size},
    identifier::Id,
    topology::{Node, Topology},
};

use crate::layout::engines::{StrategyEngine, engine_rng, random_point};

/// Force-directed layout engine.
///
/// The simulation runs a fixed number of iterations with no convergence
/// test; dense graphs may still be jittering when it stops, which is a
/// known trade-off of the fixed budget. Pairwise repulsion makes each
/// iteration O(n²), so practical input sizes are tens to low hundreds of
/// nodes; larger graphs are the caller's responsibility to cap.
pub struct Engine {
    // Simulation parameters
    iterations: usize,
    damping_factor: f32,
    // Keeps nodes visible near the canvas edge
    margin: f32,
    seed: Option<u64>,
}

impl Engine {
    /// Create a new force layout engine with default parameters.
    pub fn new() -> Self {
        Self {
            iterations: 100,
            damping_factor: 0.9,
            margin: 20.0,
            seed: None,
        }
    }

    /// Set the number of iterations for the force simulation
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Set the velocity damping factor applied each iteration
    pub fn set_damping_factor(&mut self, factor: f32) -> &mut Self {
        self.damping_factor = factor;
        self
    }

    /// Set the canvas margin positions are clamped into
    pub fn set_margin(&mut self, margin: f32) -> &mut Self {
        self.margin = margin;
        self
    }

    /// Fix the RNG seed for reproducible initial placement
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Run the force simulation and return the final positions.
    fn run_simulation(&self, topology: &Topology, canvas: Size) -> IndexMap<Id, Point> {
        let usable = canvas.to_bounds().inset(self.margin);
        let mut rng = engine_rng(self.seed);

        // Caller-supplied positions are kept as the starting point;
        // everything else starts at a random spot inside the margins.
        let mut positions: IndexMap<Id, Point> = topology
            .nodes()
            .map(|node| {
                let start = node
                    .position()
                    .unwrap_or_else(|| random_point(&mut rng, usable));
                (node.id(), start)
            })
            .collect();

        let mut velocities: IndexMap<Id, Point> = positions
            .keys()
            .map(|&node_id| (node_id, Point::default()))
            .collect();

        // Ideal pairwise distance for this canvas and node count
        let k = (canvas.area() / positions.len() as f32).sqrt();

        let node_ids: Vec<Id> = positions.keys().copied().collect();

        for _ in 0..self.iterations {
            let mut forces: IndexMap<Id, Point> = node_ids
                .iter()
                .map(|&node_id| (node_id, Point::default()))
                .collect();

            // Repulsive forces between every node pair
            for &node_i in &node_ids {
                for &node_j in &node_ids {
                    if node_i == node_j {
                        continue;
                    }

                    let trans = positions[&node_i].sub_point(positions[&node_j]);

                    // Avoid division by zero
                    let distance = trans.hypot().max(1.0);

                    let repulsion = k * k / distance;

                    // Normalize direction vector
                    let push = trans.scale(repulsion / distance);

                    let force = forces[&node_i];
                    forces.insert(node_i, force.add_point(push));
                }
            }

            // Attractive forces (spring forces) along every edge
            for edge in topology.edges() {
                let (Some(&pos_source), Some(&pos_target)) = (
                    positions.get(&edge.source()),
                    positions.get(&edge.target()),
                ) else {
                    // Edge references an absent node: contributes nothing
                    continue;
                };

                let trans = pos_source.sub_point(pos_target);

                // Avoid division by zero
                let distance = trans.hypot().max(1.0);

                let attraction = distance * distance / k;

                // Normalize direction vector
                let pull = trans.scale(attraction / distance);

                let force_source = forces[&edge.source()];
                forces.insert(edge.source(), force_source.sub_point(pull));

                let force_target = forces[&edge.target()];
                forces.insert(edge.target(), force_target.add_point(pull));
            }

            // Update velocities and positions
            for &node_id in &node_ids {
                let velocity = velocities[&node_id]
                    .add_point(forces[&node_id])
                    .scale(self.damping_factor);
                velocities.insert(node_id, velocity);

                // Fixed unit timestep, clamped to keep nodes visible
                let position = positions[&node_id].add_point(velocity).clamp_to(usable);
                positions.insert(node_id, position);
            }
        }

        positions
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

        // A lone node has no pair forces acting on it; pin it to the center
        // instead of wherever the RNG dropped it.
        if topology.node_count() == 1 {
            return topology
                .nodes()
                .map(|node| node.clone().with_position(canvas.center()))
                .collect();
        }

        let positions = self.run_simulation(topology, canvas);

        topology
            .nodes()
            .map(|node| node.clone().with_position(positions[&node.id()]))
            .collect()
    }
}
