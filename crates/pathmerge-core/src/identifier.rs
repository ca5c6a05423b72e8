//! Stable identifiers for merged graph entities.
//!
//! This module provides the key types that give nodes and edges a stable
//! identity across source diagrams:
//!
//! - [`ElementId`]: a diagram-local element identifier
//! - [`NodeKey`]: the identity of a merged node
//! - [`EdgeKey`]: the identity of a merged edge
//!
//! Keys are explicit composite types rather than concatenated strings, so
//! local identifiers that happen to contain separator characters can never
//! collide with each other.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A diagram-local element identifier.
///
/// Element ids are only meaningful within the diagram that declared them;
/// connection references and group memberships use them to point at other
/// elements of the same diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Creates an element id from its string representation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this element id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The stable identity of a merged node.
///
/// Re-encountering the same logical entity in a later diagram must map to
/// the same key:
///
/// - [`NodeKey::Id`] carries a global identifier (the canonical identifier
///   when resolution succeeded, the native identifier otherwise).
/// - [`NodeKey::Local`] identifies synthetic entities with no global
///   identity (groups, junction points); the diagram index is part of the
///   key, so these never merge across diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// A globally identified entity.
    Id(String),
    /// A diagram-scoped synthetic entity.
    Local { diagram: u32, local: ElementId },
}

impl NodeKey {
    /// Creates a key for a globally identified entity.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a key for a synthetic diagram-scoped entity.
    pub fn local(diagram: u32, local: ElementId) -> Self {
        Self::Local { diagram, local }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Local { diagram, local } => write!(f, "{diagram}.{local}"),
        }
    }
}

/// The stable identity of a merged edge: an ordered pair of node keys.
///
/// The key is identical regardless of which diagram created the edge, so
/// repeated connections across diagrams collapse into one edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    source: NodeKey,
    target: NodeKey,
}

impl EdgeKey {
    /// Creates an edge key from source and target node keys, in order.
    pub fn new(source: NodeKey, target: NodeKey) -> Self {
        Self { source, target }
    }

    /// Returns the source node key.
    pub fn source(&self) -> &NodeKey {
        &self.source
    }

    /// Returns the target node key.
    pub fn target(&self) -> &NodeKey {
        &self.target
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_keys_embed_diagram_index() {
        let a = NodeKey::local(0, ElementId::new("grp1"));
        let b = NodeKey::local(1, ElementId::new("grp1"));

        assert_ne!(a, b);
        assert_eq!(a.to_string(), "0.grp1");
        assert_eq!(b.to_string(), "1.grp1");
    }

    #[test]
    fn test_separator_in_local_id_does_not_collide() {
        // "1.2" as a local id of diagram 0 should stay distinct from
        // "2" as a local id of a hypothetical diagram named by the same
        // rendered string.
        let tricky = NodeKey::local(0, ElementId::new("1.2"));
        let plain = NodeKey::id("0.1.2");

        assert_ne!(tricky, plain);
    }

    #[test]
    fn test_edge_key_is_order_sensitive() {
        let a = NodeKey::id("A");
        let b = NodeKey::id("B");

        let forward = EdgeKey::new(a.clone(), b.clone());
        let backward = EdgeKey::new(b, a);

        assert_ne!(forward, backward);
        assert_eq!(forward.to_string(), "A - B");
    }
}
