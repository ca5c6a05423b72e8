//! The merged network model.
//!
//! This module provides the graph the merge engine builds: nodes and edges
//! keyed by stable identifiers, each carrying generic attributes and
//! contributing-diagram provenance.
//!
//! # Architecture
//!
//! - [`NodeKind`] / [`EdgeKind`]: closed tags classifying entities
//! - [`Node`] / [`Edge`]: merged entities, created once and mutated in
//!   place on later encounters
//! - [`Graph`]: owner of the keyed node and edge collections with
//!   idempotent insertion (same key means same entity)

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::attribute::Attributes;
use crate::identifier::{EdgeKey, NodeKey};
use crate::provenance::Provenance;

/// The entity type tag of a merged node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    GeneProduct,
    Protein,
    Metabolite,
    /// A reference to a sub-pathway.
    Pathway,
    /// A synthetic node standing in for a diagram group.
    Group,
    /// A synthetic node standing in for a multi-way junction point.
    Anchor,
}

impl NodeKind {
    /// The tag name used in exported attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneProduct => "GeneProduct",
            Self::Protein => "Protein",
            Self::Metabolite => "Metabolite",
            Self::Pathway => "Pathway",
            Self::Group => "Group",
            Self::Anchor => "Anchor",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The relation type tag of a merged edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    /// Membership of a node in a diagram group.
    Group,
    /// A connection mediated by a junction point.
    Anchor,
    /// A direct connection, tagged with its line-start style name.
    Interaction(String),
}

impl EdgeKind {
    /// The tag name used in exported attributes.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Group => "Group",
            Self::Anchor => "Anchor",
            Self::Interaction(style) => style,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A merged node.
///
/// A node is created on first encounter of its logical identity and only
/// accumulates provenance afterwards; its identity attributes are never
/// rewritten, and it is never deleted during a run.
#[derive(Debug, Clone)]
pub struct Node {
    key: NodeKey,
    kind: NodeKind,
    attributes: Attributes,
    provenance: Provenance,
}

impl Node {
    /// Creates a new node with the given key and kind.
    pub fn new(key: NodeKey, kind: NodeKind) -> Self {
        Self {
            key,
            kind,
            attributes: Attributes::new(),
            provenance: Provenance::new(),
        }
    }

    /// Returns the node's stable key.
    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    /// Returns the node's entity type tag.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Borrows the node's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutably borrows the node's attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Borrows the node's contributing-diagram provenance.
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Records a contributing diagram; recording the same index twice is a
    /// no-op.
    pub fn record_diagram(&mut self, diagram: u32) -> bool {
        self.provenance.record(diagram)
    }
}

/// A merged edge between two nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    key: EdgeKey,
    kind: EdgeKind,
    attributes: Attributes,
    provenance: Provenance,
}

impl Edge {
    /// Creates a new edge between the given endpoint keys.
    ///
    /// The edge key is derived from the endpoints in source-then-target
    /// order, so the identity is the same regardless of which diagram
    /// creates it.
    pub fn new(source: NodeKey, target: NodeKey, kind: EdgeKind) -> Self {
        Self {
            key: EdgeKey::new(source, target),
            kind,
            attributes: Attributes::new(),
            provenance: Provenance::new(),
        }
    }

    /// Returns the edge's stable key.
    pub fn key(&self) -> &EdgeKey {
        &self.key
    }

    /// Returns the source node key.
    pub fn source(&self) -> &NodeKey {
        self.key.source()
    }

    /// Returns the target node key.
    pub fn target(&self) -> &NodeKey {
        self.key.target()
    }

    /// Returns the edge's relation type tag.
    pub fn kind(&self) -> &EdgeKind {
        &self.kind
    }

    /// Borrows the edge's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutably borrows the edge's attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Borrows the edge's contributing-diagram provenance.
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Records a contributing diagram; recording the same index twice is a
    /// no-op.
    pub fn record_diagram(&mut self, diagram: u32) -> bool {
        self.provenance.record(diagram)
    }
}

/// The merged network.
///
/// Owns the full node and edge collections plus a title and graph-level
/// attributes. Insertion is idempotent: inserting an entity whose key is
/// already present returns the existing entity unchanged.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    title: String,
    attributes: Attributes,
    nodes: IndexMap<NodeKey, Node>,
    edges: IndexMap<EdgeKey, Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the graph title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the graph title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Borrows the graph-level attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutably borrows the graph-level attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Inserts a node, or returns the existing node with the same key.
    pub fn add_node(&mut self, node: Node) -> &mut Node {
        match self.nodes.entry(node.key().clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(node),
        }
    }

    /// Inserts an edge, or returns the existing edge with the same key.
    pub fn add_edge(&mut self, edge: Edge) -> &mut Edge {
        match self.edges.entry(edge.key().clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(edge),
        }
    }

    /// Returns the node with the given key, if it exists.
    pub fn node(&self, key: &NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Returns the node with the given key for mutation, if it exists.
    pub fn node_mut(&mut self, key: &NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Returns the edge with the given key, if it exists.
    pub fn edge(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges.get(key)
    }

    /// Returns the edge with the given key for mutation, if it exists.
    pub fn edge_mut(&mut self, key: &EdgeKey) -> Option<&mut Edge> {
        self.edges.get_mut(key)
    }

    /// Iterates all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterates all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// The total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
