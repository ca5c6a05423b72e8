//! Serialization of the finished graph.
//!
//! The merge engine hands the finished [`Graph`] to an [`Exporter`] and
//! has no dependency on the serialized format's syntax. [`xgmml`] provides
//! the shipped implementation.

pub mod xgmml;

use std::io::{self, Write};

use pathmerge_core::graph::Graph;

/// A pure, stateless writer driven by the finished graph.
pub trait Exporter {
    /// Serializes the graph to the given sink.
    fn export(&self, graph: &Graph, out: &mut dyn Write) -> io::Result<()>;
}
