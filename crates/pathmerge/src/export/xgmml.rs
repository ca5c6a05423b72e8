//! XGMML serialization of the merged graph.
//!
//! Writes the interchange format consumed by network analysis tools:
//! a `<graph>` root carrying the per-diagram title attributes, one
//! `<node>` element per merged node and one `<edge>` element per merged
//! edge, each with its type tag and provenance attributes.

use std::io::{self, Write};

use pathmerge_core::graph::{Edge, Graph, Node};
use pathmerge_core::provenance::Provenance;

use super::Exporter;

const XGMML_NAMESPACE: &str = "http://www.cs.rpi.edu/XGMML";

/// The XGMML writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct XgmmlExporter;

impl XgmmlExporter {
    /// Creates an XGMML exporter.
    pub fn new() -> Self {
        Self
    }

    fn write_att(&self, out: &mut dyn Write, name: &str, value: &str) -> io::Result<()> {
        writeln!(
            out,
            "    <att name=\"{}\" value=\"{}\"/>",
            escape(name),
            escape(value)
        )
    }

    fn write_provenance(&self, out: &mut dyn Write, provenance: &Provenance) -> io::Result<()> {
        self.write_att(out, "pathways", &provenance.to_string())?;
        self.write_att(out, "pathwayCount", &provenance.count().to_string())
    }

    fn write_node(&self, out: &mut dyn Write, node: &Node) -> io::Result<()> {
        let id = node.key().to_string();
        let label = node.attributes().get("Label").unwrap_or(&id);
        writeln!(
            out,
            "  <node id=\"{}\" label=\"{}\">",
            escape(&id),
            escape(label)
        )?;
        self.write_att(out, "Type", node.kind().as_str())?;
        for (name, value) in node.attributes().iter() {
            self.write_att(out, name, value)?;
        }
        self.write_provenance(out, node.provenance())?;
        writeln!(out, "  </node>")
    }

    fn write_edge(&self, out: &mut dyn Write, edge: &Edge) -> io::Result<()> {
        writeln!(
            out,
            "  <edge source=\"{}\" target=\"{}\" label=\"{}\">",
            escape(&edge.source().to_string()),
            escape(&edge.target().to_string()),
            escape(&edge.key().to_string())
        )?;
        self.write_att(out, "Type", edge.kind().as_str())?;
        for (name, value) in edge.attributes().iter() {
            self.write_att(out, name, value)?;
        }
        self.write_provenance(out, edge.provenance())?;
        writeln!(out, "  </edge>")
    }
}

impl Exporter for XgmmlExporter {
    fn export(&self, graph: &Graph, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            out,
            "<graph label=\"{}\" directed=\"1\" xmlns=\"{}\">",
            escape(graph.title()),
            XGMML_NAMESPACE
        )?;
        for (name, value) in graph.attributes().iter() {
            writeln!(
                out,
                "  <att name=\"{}\" value=\"{}\"/>",
                escape(name),
                escape(value)
            )?;
        }
        for node in graph.nodes() {
            self.write_node(out, node)?;
        }
        for edge in graph.edges() {
            self.write_edge(out, edge)?;
        }
        writeln!(out, "</graph>")
    }
}

/// Escapes text for use in XML attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathmerge_core::graph::{Edge, EdgeKind, Node, NodeKind};
    use pathmerge_core::identifier::NodeKey;

    fn export_to_string(graph: &Graph) -> String {
        let mut out = Vec::new();
        XgmmlExporter::new().export(graph, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_export_empty_graph() {
        let mut graph = Graph::new();
        graph.set_title("Merged pathways");

        let xml = export_to_string(&graph);
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<graph label=\"Merged pathways\" directed=\"1\""));
        assert!(xml.trim_end().ends_with("</graph>"));
    }

    #[test]
    fn test_export_node_and_edge() {
        let mut graph = Graph::new();
        let mut node = Node::new(NodeKey::id("ENSG001"), NodeKind::GeneProduct);
        node.attributes_mut().set("Label", "TP53");
        node.record_diagram(0);
        node.record_diagram(1);
        graph.add_node(node);
        graph.add_node(Node::new(NodeKey::id("HMDB01"), NodeKind::Metabolite));

        let mut edge = Edge::new(
            NodeKey::id("ENSG001"),
            NodeKey::id("HMDB01"),
            EdgeKind::Interaction("Arrow".into()),
        );
        edge.record_diagram(0);
        graph.add_edge(edge);

        let xml = export_to_string(&graph);
        assert!(xml.contains("<node id=\"ENSG001\" label=\"TP53\">"));
        assert!(xml.contains("<att name=\"Type\" value=\"GeneProduct\"/>"));
        assert!(xml.contains("<att name=\"pathways\" value=\"0 | 1\"/>"));
        assert!(xml.contains("<att name=\"pathwayCount\" value=\"2\"/>"));
        assert!(xml.contains(
            "<edge source=\"ENSG001\" target=\"HMDB01\" label=\"ENSG001 - HMDB01\">"
        ));
        assert!(xml.contains("<att name=\"Type\" value=\"Arrow\"/>"));
    }

    #[test]
    fn test_export_escapes_markup() {
        let mut graph = Graph::new();
        graph.set_title("a < b & \"c\"");
        graph.attributes_mut().append("0 Pathway", "TNF-α <signaling>");

        let xml = export_to_string(&graph);
        assert!(xml.contains("label=\"a &lt; b &amp; &quot;c&quot;\""));
        assert!(xml.contains("value=\"TNF-α &lt;signaling&gt;\""));
        assert!(!xml.contains("<signaling>"));
    }
}
