//! Pathmerge - merges biological pathway diagrams into one unified network.
//!
//! The same gene, protein, metabolite, or sub-pathway may be referenced
//! with different identifiers across independently authored diagrams.
//! Pathmerge resolves those references to canonical identifiers, merges
//! the diagrams into a single graph with per-entity provenance, and
//! exports the result as XGMML.

pub mod config;
pub mod export;

mod error;
mod merge;

pub use pathmerge_core::{attribute, graph, identifier, pathway, provenance, resolver};

pub use error::MergeError;

use pathway::Pathway;
use resolver::IdResolver;

use merge::Merger;

/// Builder for merging source pathway diagrams into one network.
///
/// Holds the optional identifier resolvers (one for genes and proteins,
/// one for metabolites) and the title of the merged graph. Kinds without a
/// configured resolver keep their native identifiers.
///
/// # Examples
///
/// ```rust,no_run
/// use pathmerge::NetworkBuilder;
/// use pathmerge::pathway::Pathway;
///
/// let pathways: Vec<Pathway> = Vec::new();
///
/// let builder = NetworkBuilder::new().with_title("Merged pathways");
/// let graph = builder.merge(&pathways).expect("merge failed");
///
/// println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
/// ```
pub struct NetworkBuilder {
    title: String,
    gene_resolver: Option<Box<dyn IdResolver>>,
    metabolite_resolver: Option<Box<dyn IdResolver>>,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkBuilder {
    /// Creates a builder with no resolvers configured.
    pub fn new() -> Self {
        Self {
            title: "Merged pathways".to_string(),
            gene_resolver: None,
            metabolite_resolver: None,
        }
    }

    /// Sets the title of the merged graph.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Configures the resolver unifying gene and protein identifiers.
    pub fn with_gene_resolver(mut self, resolver: impl IdResolver + 'static) -> Self {
        self.gene_resolver = Some(Box::new(resolver));
        self
    }

    /// Configures the resolver unifying metabolite identifiers.
    pub fn with_metabolite_resolver(mut self, resolver: impl IdResolver + 'static) -> Self {
        self.metabolite_resolver = Some(Box::new(resolver));
        self
    }

    /// Merges the given diagrams, in order, into one graph.
    ///
    /// Diagram indices (used for provenance and for the keys of synthetic
    /// nodes) follow the slice order.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError`] if the identifier resolver fails; the run
    /// aborts on the first failure and nothing is exported.
    pub fn merge(&self, pathways: &[Pathway]) -> Result<graph::Graph, MergeError> {
        let merger = Merger::new(
            self.gene_resolver.as_deref(),
            self.metabolite_resolver.as_deref(),
            &self.title,
        );
        merger.merge(pathways)
    }
}
