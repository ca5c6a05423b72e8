//! The merge engine.
//!
//! Diagrams are processed strictly sequentially, and each diagram goes
//! through three ordered passes:
//!
//! 1. **Node pass** - typed, cross-referenced data nodes are resolved to
//!    canonical identifiers and merged into the graph.
//! 2. **Group pass** - groups with at least two merged members become
//!    synthetic group nodes with membership edges.
//! 3. **Connection pass** - lines become edges between merged nodes,
//!    with junction points collapsing multi-way connections into a single
//!    edge or a synthetic hub node.
//!
//! Passes 2 and 3 depend on the element-to-node lookup populated by pass 1
//! (and, for line endpoints referencing groups, by pass 2). Every entity
//! accumulates contributing-diagram provenance; re-encountering the same
//! logical entity never creates a duplicate.

use std::collections::HashMap;

use log::{debug, info};

use pathmerge_core::graph::{Edge, EdgeKind, Graph, Node, NodeKind};
use pathmerge_core::identifier::{ElementId, NodeKey};
use pathmerge_core::pathway::{DataNode, DataNodeKind, Group, Line, Pathway, PathwayElement, Xref};
use pathmerge_core::resolver::{IdResolver, ResolverError};

use crate::error::MergeError;

/// Target naming system for genes and proteins (Ensembl).
const ENSEMBL: &str = "En";
/// Target naming system for metabolites (HMDB).
const HMDB: &str = "Ch";
/// Native naming system of sub-pathway references (WikiPathways); these
/// are never resolved.
const WIKIPATHWAYS: &str = "Wp";

/// A diagram-scoped reference to a source element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ElementRef {
    diagram: u32,
    element: ElementId,
}

impl ElementRef {
    fn new(diagram: u32, element: &ElementId) -> Self {
        Self {
            diagram,
            element: element.clone(),
        }
    }
}

/// Per-diagram element tallies, reported after each diagram.
#[derive(Debug, Default)]
struct Tally {
    genes: usize,
    metabolites: usize,
    pathway_refs: usize,
    groups: usize,
    lines: usize,
}

/// The merge engine state: the graph under construction plus the
/// element-to-node lookup shared by the three passes.
pub(crate) struct Merger<'a> {
    gene: Option<&'a dyn IdResolver>,
    metabolite: Option<&'a dyn IdResolver>,
    graph: Graph,
    element_nodes: HashMap<ElementRef, NodeKey>,
}

impl<'a> Merger<'a> {
    pub(crate) fn new(
        gene: Option<&'a dyn IdResolver>,
        metabolite: Option<&'a dyn IdResolver>,
        title: &str,
    ) -> Self {
        let mut graph = Graph::new();
        graph.set_title(title);
        Self {
            gene,
            metabolite,
            graph,
            element_nodes: HashMap::new(),
        }
    }

    /// Merges all diagrams into one graph and finalizes it.
    pub(crate) fn merge(mut self, pathways: &[Pathway]) -> Result<Graph, MergeError> {
        info!(diagram_count = pathways.len(); "Merging pathways");

        for (index, pathway) in pathways.iter().enumerate() {
            self.merge_pathway(index as u32, pathway)?;
        }

        // Every diagram leaves a title attribute, contribution or not.
        for (index, pathway) in pathways.iter().enumerate() {
            self.graph
                .attributes_mut()
                .append(format!("{index} Pathway"), pathway.name());
        }

        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count();
            "Merge finished"
        );
        Ok(self.graph)
    }

    fn merge_pathway(&mut self, diagram: u32, pathway: &Pathway) -> Result<(), MergeError> {
        debug!(
            diagram,
            name = pathway.name(),
            elements = pathway.elements().len();
            "Merging diagram"
        );
        let mut tally = Tally::default();

        for element in pathway.elements() {
            if let PathwayElement::DataNode(node) = element {
                self.merge_data_node(diagram, node, &mut tally)?;
            }
        }
        for element in pathway.elements() {
            if let PathwayElement::Group(group) = element {
                tally.groups += 1;
                self.merge_group(diagram, group);
            }
        }
        for element in pathway.elements() {
            if let PathwayElement::Line(line) = element {
                tally.lines += 1;
                self.merge_line(diagram, pathway, line);
            }
        }

        debug!(
            diagram,
            genes = tally.genes,
            metabolites = tally.metabolites,
            pathway_refs = tally.pathway_refs,
            groups = tally.groups,
            lines = tally.lines;
            "Diagram merged"
        );
        Ok(())
    }

    /// Pass 1: merge one typed, cross-referenced data node.
    ///
    /// Elements without a usable cross-reference or with an unmodeled kind
    /// contribute nothing and stay invisible to the later passes.
    fn merge_data_node(
        &mut self,
        diagram: u32,
        node: &DataNode,
        tally: &mut Tally,
    ) -> Result<(), MergeError> {
        let Some(xref) = node.xref() else {
            return Ok(());
        };
        if xref.id().is_empty() {
            return Ok(());
        }

        let (resolver, target, kind) = match node.kind() {
            DataNodeKind::GeneProduct => (self.gene, ENSEMBL, NodeKind::GeneProduct),
            DataNodeKind::Protein => (self.gene, ENSEMBL, NodeKind::Protein),
            DataNodeKind::Metabolite => (self.metabolite, HMDB, NodeKind::Metabolite),
            DataNodeKind::Pathway => (None, WIKIPATHWAYS, NodeKind::Pathway),
            DataNodeKind::Other => return Ok(()),
        };
        match kind {
            NodeKind::GeneProduct | NodeKind::Protein => tally.genes += 1,
            NodeKind::Metabolite => tally.metabolites += 1,
            NodeKind::Pathway => tally.pathway_refs += 1,
            _ => {}
        }

        let canonical = unify(resolver, xref, target)?;
        let key = NodeKey::id(canonical.as_ref().map_or(xref.id(), Xref::id));

        if let Some(existing) = self.graph.node_mut(&key) {
            // Identity attributes stay untouched on later encounters.
            existing.record_diagram(diagram);
        } else {
            let label = self.label_for(node, canonical.as_ref().unwrap_or(xref))?;
            let mut merged = Node::new(key.clone(), kind);
            let attrs = merged.attributes_mut();
            attrs.set("Label", label);
            attrs.set("SourceId", xref.id());
            if let Some(canonical) = &canonical {
                attrs.set("UnifiedId", canonical.id());
            }
            merged.record_diagram(diagram);
            self.graph.add_node(merged);
        }

        self.element_nodes
            .insert(ElementRef::new(diagram, node.id()), key);
        Ok(())
    }

    /// The display label for a newly created node.
    ///
    /// Metabolites keep the element's own display text; other entities try
    /// the resolver's symbol annotation first.
    fn label_for(&self, node: &DataNode, xref: &Xref) -> Result<String, ResolverError> {
        if node.kind() == DataNodeKind::Metabolite {
            return Ok(node.label().to_string());
        }
        if let Some(gene) = self.gene {
            if let Some(symbol) = gene.symbol_of(xref)? {
                return Ok(symbol);
            }
        }
        Ok(node.label().to_string())
    }

    /// Pass 2: merge one group element.
    ///
    /// Members without a merged node are dropped silently; groups with
    /// fewer than two remaining members produce nothing.
    fn merge_group(&mut self, diagram: u32, group: &Group) {
        let members: Vec<NodeKey> = group
            .members()
            .iter()
            .filter_map(|member| {
                self.element_nodes
                    .get(&ElementRef::new(diagram, member))
                    .cloned()
            })
            .collect();
        if members.len() < 2 {
            return;
        }

        let key = NodeKey::local(diagram, group.id().clone());
        self.graph
            .add_node(Node::new(key.clone(), NodeKind::Group))
            .record_diagram(diagram);
        self.element_nodes
            .insert(ElementRef::new(diagram, group.id()), key.clone());

        for member in members {
            self.upsert_edge(member, key.clone(), EdgeKind::Group, diagram);
        }
    }

    /// Pass 3: merge one line element.
    fn merge_line(&mut self, diagram: u32, pathway: &Pathway, line: &Line) {
        let start = self.endpoint_node(diagram, pathway, line.start());
        let end = self.endpoint_node(diagram, pathway, line.end());

        if line.anchors().is_empty() {
            if let (Some(start), Some(end)) = (start, end) {
                self.upsert_edge(
                    start,
                    end,
                    EdgeKind::Interaction(line.style().to_string()),
                    diagram,
                );
            }
            return;
        }

        // Seed with the directly resolved endpoints, then collect the far
        // ends of every line attaching to one of this line's junctions.
        let mut candidates: Vec<NodeKey> = Vec::new();
        candidates.extend(start);
        candidates.extend(end);
        for anchor in line.anchors() {
            for other in pathway.lines() {
                let (Some(other_start), Some(other_end)) = (other.start(), other.end()) else {
                    continue;
                };
                if other_start == anchor {
                    candidates.extend(self.endpoint_node(diagram, pathway, Some(other_end)));
                } else if other_end == anchor {
                    candidates.extend(self.endpoint_node(diagram, pathway, Some(other_start)));
                }
            }
        }

        if candidates.len() == 2 {
            let target = candidates.pop();
            let source = candidates.pop();
            if let (Some(source), Some(target)) = (source, target) {
                self.upsert_edge(source, target, EdgeKind::Anchor, diagram);
            }
        } else if candidates.len() > 2 {
            // A multi-way junction becomes a synthetic hub node.
            let junction = NodeKey::local(diagram, line.anchors()[0].clone());
            self.graph
                .add_node(Node::new(junction.clone(), NodeKind::Anchor))
                .record_diagram(diagram);
            self.element_nodes
                .insert(ElementRef::new(diagram, line.id()), junction.clone());

            for candidate in candidates {
                self.upsert_edge(candidate, junction.clone(), EdgeKind::Anchor, diagram);
            }
        }
    }

    /// Resolves a connection reference to the merged node of the element
    /// it points at, if both exist.
    fn endpoint_node(
        &self,
        diagram: u32,
        pathway: &Pathway,
        reference: Option<&ElementId>,
    ) -> Option<NodeKey> {
        let element = pathway.element(reference?)?;
        self.element_nodes
            .get(&ElementRef::new(diagram, element.local_id()))
            .cloned()
    }

    /// Creates an edge or updates the provenance of the existing one.
    ///
    /// The relation tag is fixed on first creation; later encounters only
    /// record the contributing diagram.
    fn upsert_edge(&mut self, source: NodeKey, target: NodeKey, kind: EdgeKind, diagram: u32) {
        self.graph
            .add_edge(Edge::new(source, target, kind))
            .record_diagram(diagram);
    }
}

/// Determines the canonical cross-reference for an element, if any.
///
/// Without a resolver (or without a usable system code) the element stays
/// unresolved and keeps its native identifier. A native system already
/// matching the target needs no resolver call. Otherwise the first
/// candidate wins; an empty candidate set falls back to unresolved.
fn unify(
    resolver: Option<&dyn IdResolver>,
    xref: &Xref,
    target: &str,
) -> Result<Option<Xref>, ResolverError> {
    let Some(resolver) = resolver else {
        return Ok(None);
    };
    let Some(code) = xref.data_source().corrected_code() else {
        return Ok(None);
    };
    if code == target {
        return Ok(Some(xref.clone()));
    }
    let candidates = resolver.resolve(xref, target)?;
    Ok(candidates.into_iter().next())
}
