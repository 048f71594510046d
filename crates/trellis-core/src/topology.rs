//! The topology data model: nodes, edges, and their aggregate.
//!
//! A [`Topology`] is the input to every layout strategy: a collection of
//! [`Node`]s keyed by identifier plus a list of [`Edge`]s referencing them.
//! Layout engines never mutate a topology; they return new nodes with
//! positions populated and leave the caller to merge or store them.
//!
//! # Iteration order
//!
//! Nodes iterate in insertion order (the collection is an [`IndexMap`]), and
//! edges in the order they were added. Every engine that depends on "input
//! order" (tie-breaking roots, circular and grid placement, BFS seeding)
//! inherits this guarantee, so repeated runs over the same topology see the
//! same order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{geometry::Point, identifier::Id};

/// Relative display size of a node, a rendering hint only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

/// Optional rendering hints carried by a node.
///
/// Hints are opaque to the layout engines; they travel with the node so a
/// renderer downstream can pick them up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderHint {
    #[serde(default)]
    size_class: SizeClass,
    #[serde(default)]
    color: Option<String>,
}

impl RenderHint {
    /// Creates a rendering hint with a size class and an optional color.
    pub fn new(size_class: SizeClass, color: Option<String>) -> Self {
        Self { size_class, color }
    }

    /// Returns the size class of this hint.
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// Returns the color of this hint, if one is set.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// A node in the topology.
///
/// Identity, label, and kind are immutable inputs; the position is the
/// mutable *output* of a layout run, absent until a strategy assigns it.
/// Position updates go through [`Node::with_position`], which returns an
/// updated copy, so ownership of the position field is always explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: Id,
    label: String,
    kind: String,
    #[serde(default)]
    position: Option<Point>,
    #[serde(default)]
    hint: Option<RenderHint>,
}

impl Node {
    /// Creates a new node with no position and no rendering hint.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier of the node
    /// * `label` - Display label
    /// * `kind` - Free-form category tag (e.g. `"router"`, `"host"`)
    pub fn new(id: impl Into<Id>, label: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: kind.into(),
            position: None,
            hint: None,
        }
    }

    /// Returns a copy of this node carrying the given rendering hint.
    pub fn with_hint(mut self, hint: RenderHint) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Returns a copy of this node with the position set.
    ///
    /// This is the only way a position changes; the original node is left
    /// untouched.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns the unique identifier of the node.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the display label of the node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the category tag of the node.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the node's position, if a layout has assigned one.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Returns the node's rendering hint, if one is set.
    pub fn hint(&self) -> Option<&RenderHint> {
        self.hint.as_ref()
    }
}

fn default_directed() -> bool {
    true
}

/// An edge between two nodes of the topology.
///
/// Source and target reference nodes by identifier. References to absent
/// nodes are a caller error and are not validated here; downstream consumers
/// tolerate them by skipping the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: Id,
    source: Id,
    target: Id,
    kind: String,
    #[serde(default = "default_directed")]
    directed: bool,
}

impl Edge {
    /// Creates a new directed edge.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier of the edge
    /// * `source` - Identifier of the source node
    /// * `target` - Identifier of the target node
    /// * `kind` - Free-form category tag (e.g. `"link"`)
    pub fn new(
        id: impl Into<Id>,
        source: impl Into<Id>,
        target: impl Into<Id>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind: kind.into(),
            directed: true,
        }
    }

    /// Returns a copy of this edge marked as undirected.
    ///
    /// Directionality is a rendering hint; layout traversal reads
    /// `source → target` either way, except where an engine documents
    /// otherwise.
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    /// Returns the unique identifier of the edge.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the identifier of the source node.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the identifier of the target node.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the category tag of the edge.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns whether the edge is directed.
    pub fn directed(&self) -> bool {
        self.directed
    }
}

/// An aggregate of nodes and edges handed to the layout engines.
///
/// Arbitrary graphs are accepted: cycles, self-loops, and multi-edges are
/// all valid input. The topology holds no layout state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Topology {
    nodes: IndexMap<Id, Node>,
    edges: Vec<Edge>,
}

impl Topology {
    /// Creates an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, keyed by its identifier.
    ///
    /// Inserting a node with an existing identifier replaces the previous
    /// node but keeps its slot in the iteration order.
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id(), node);
    }

    /// Appends an edge.
    ///
    /// Dangling source/target references are accepted; they are skipped
    /// later wherever the edge would contribute.
    pub fn insert_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Looks up a node by identifier.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Checks whether a node with the given identifier exists.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns an iterator over the node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.nodes.keys().copied()
    }

    /// Returns an iterator over the edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks whether the topology has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
