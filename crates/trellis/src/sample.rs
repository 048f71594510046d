//! Sample topology generation.
//!
//! Topologies are usually constructed by the caller; this module provides a
//! generator for common network shapes so demos, tests, and the CLI have
//! something to lay out without hand-writing node lists. Generation is
//! deterministic for a given seed.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng;

use trellis_core::topology::{Edge, Node, RenderHint, SizeClass, Topology};

use crate::layout::engine_rng;

/// Probability of an extra cross link in the mesh shape.
const MESH_EXTRA_LINK_PROBABILITY: f64 = 0.25;

/// Node kinds cycled through by the generated shapes.
const KINDS: [&str; 4] = ["router", "switch", "server", "host"];

/// Available sample topology shapes.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleShape {
    /// One hub linked to every other node
    Star,
    /// A closed loop of nodes
    Ring,
    /// A chain backbone with random cross links (default)
    #[default]
    Mesh,
    /// A straight chain
    Chain,
    /// A random recursive tree
    Tree,
}

impl SampleShape {
    /// Returns all shapes, in display order.
    pub fn all() -> [Self; 5] {
        [
            Self::Star,
            Self::Ring,
            Self::Mesh,
            Self::Chain,
            Self::Tree,
        ]
    }
}

impl FromStr for SampleShape {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "star" => Ok(Self::Star),
            "ring" => Ok(Self::Ring),
            "mesh" => Ok(Self::Mesh),
            "chain" => Ok(Self::Chain),
            "tree" => Ok(Self::Tree),
            _ => Err("Unsupported sample shape"),
        }
    }
}

impl From<SampleShape> for &'static str {
    fn from(val: SampleShape) -> Self {
        match val {
            SampleShape::Star => "star",
            SampleShape::Ring => "ring",
            SampleShape::Mesh => "mesh",
            SampleShape::Chain => "chain",
            SampleShape::Tree => "tree",
        }
    }
}

impl Display for SampleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Generates a sample topology of the given shape and size.
///
/// Nodes carry network-flavored kinds (`router`, `switch`, `server`,
/// `host`) and matching size-class hints; edges are plain `link`s. Passing
/// the same seed reproduces the same topology; without a seed the random
/// shapes (mesh, tree) draw from OS entropy.
///
/// # Arguments
///
/// * `shape` - Which shape to generate
/// * `node_count` - Number of nodes (zero yields an empty topology)
/// * `seed` - Optional RNG seed for reproducible generation
pub fn generate(shape: SampleShape, node_count: usize, seed: Option<u64>) -> Topology {
    let mut topology = Topology::new();
    if node_count == 0 {
        return topology;
    }

    let mut rng = engine_rng(seed);
    let mut link_counter = 0usize;
    let mut link = |topology: &mut Topology, source: &str, target: &str| {
        let id = format!("link-{link_counter}");
        topology.insert_edge(Edge::new(id.as_str(), source, target, "link"));
        link_counter += 1;
    };

    let kind_of = |index: usize| match shape {
        SampleShape::Star => {
            if index == 0 {
                "router"
            } else {
                "host"
            }
        }
        SampleShape::Ring => "switch",
        _ => KINDS[index % KINDS.len()],
    };

    let ids: Vec<String> = (0..node_count)
        .map(|index| format!("{}-{index}", kind_of(index)))
        .collect();

    for (index, id) in ids.iter().enumerate() {
        let kind = kind_of(index);
        let mut label = kind.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        let hint = match kind {
            "router" => RenderHint::new(SizeClass::Large, None),
            "host" => RenderHint::new(SizeClass::Small, None),
            _ => RenderHint::default(),
        };
        topology.insert_node(
            Node::new(id.as_str(), format!("{label} {index}"), kind).with_hint(hint),
        );
    }

    match shape {
        SampleShape::Star => {
            for target in &ids[1..] {
                link(&mut topology, &ids[0], target);
            }
        }
        SampleShape::Ring => {
            if node_count > 1 {
                for index in 0..node_count {
                    let next = (index + 1) % node_count;
                    link(&mut topology, &ids[index], &ids[next]);
                }
            }
        }
        SampleShape::Chain => {
            for index in 1..node_count {
                link(&mut topology, &ids[index - 1], &ids[index]);
            }
        }
        SampleShape::Mesh => {
            // Chain backbone keeps the mesh connected; cross links are the
            // random part.
            for index in 1..node_count {
                link(&mut topology, &ids[index - 1], &ids[index]);
            }
            for source in 0..node_count {
                for target in (source + 2)..node_count {
                    if rng.random_bool(MESH_EXTRA_LINK_PROBABILITY) {
                        link(&mut topology, &ids[source], &ids[target]);
                    }
                }
            }
        }
        SampleShape::Tree => {
            for index in 1..node_count {
                let parent = rng.random_range(0..index);
                link(&mut topology, &ids[parent], &ids[index]);
            }
        }
    }

    topology
}
