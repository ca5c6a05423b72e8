//! The source pathway diagram model.
//!
//! A [`Pathway`] is one source diagram: an ordered sequence of typed
//! elements with diagram-local identifiers. The merge engine consumes this
//! model as-is; how it gets populated (deserialization, a parser, test
//! fixtures) is not this module's concern, so every type derives the serde
//! traits and nothing here performs I/O.

use serde::{Deserialize, Serialize};

use crate::identifier::ElementId;

/// Full name of the data source whose system code is historically
/// mislabeled and must be corrected before comparison.
const UNIPROT_TREMBL: &str = "Uniprot/TrEMBL";

/// System code substituted for the mislabeled source.
const SWISSPROT_CODE: &str = "S";

/// A naming system for entity identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    full_name: String,
    #[serde(default)]
    system_code: Option<String>,
}

impl DataSource {
    /// Creates a data source from its full name and optional system code.
    pub fn new(full_name: impl Into<String>, system_code: Option<String>) -> Self {
        Self {
            full_name: full_name.into(),
            system_code,
        }
    }

    /// Returns the data source's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the system code with the legacy mislabeling corrected.
    ///
    /// The `Uniprot/TrEMBL` source ships a wrong code; it maps to the
    /// SwissProt code before any comparison against a target system.
    pub fn corrected_code(&self) -> Option<&str> {
        if self.full_name == UNIPROT_TREMBL {
            Some(SWISSPROT_CODE)
        } else {
            self.system_code.as_deref()
        }
    }
}

/// A cross-reference: an identifier within a naming system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xref {
    id: String,
    data_source: DataSource,
}

impl Xref {
    /// Creates a cross-reference.
    pub fn new(id: impl Into<String>, data_source: DataSource) -> Self {
        Self {
            id: id.into(),
            data_source,
        }
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the naming system.
    pub fn data_source(&self) -> &DataSource {
        &self.data_source
    }
}

/// The entity kind of a data node element.
///
/// Kinds outside the modeled set deserialize to [`DataNodeKind::Other`],
/// which the merge engine treats as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataNodeKind {
    GeneProduct,
    Protein,
    Metabolite,
    Pathway,
    Other,
}

impl From<String> for DataNodeKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "GeneProduct" => Self::GeneProduct,
            "Protein" => Self::Protein,
            "Metabolite" => Self::Metabolite,
            "Pathway" => Self::Pathway,
            _ => Self::Other,
        }
    }
}

impl From<DataNodeKind> for String {
    fn from(kind: DataNodeKind) -> Self {
        let name = match kind {
            DataNodeKind::GeneProduct => "GeneProduct",
            DataNodeKind::Protein => "Protein",
            DataNodeKind::Metabolite => "Metabolite",
            DataNodeKind::Pathway => "Pathway",
            DataNodeKind::Other => "Other",
        };
        name.to_string()
    }
}

/// A typed, optionally cross-referenced data node element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataNode {
    id: ElementId,
    kind: DataNodeKind,
    #[serde(default)]
    label: String,
    #[serde(default)]
    xref: Option<Xref>,
}

impl DataNode {
    /// Creates a data node element.
    pub fn new(
        id: ElementId,
        kind: DataNodeKind,
        label: impl Into<String>,
        xref: Option<Xref>,
    ) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            xref,
        }
    }

    /// Returns the diagram-local element id.
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Returns the entity kind.
    pub fn kind(&self) -> DataNodeKind {
        self.kind
    }

    /// Returns the element's own display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the cross-reference, if the element carries one.
    pub fn xref(&self) -> Option<&Xref> {
        self.xref.as_ref()
    }
}

/// A group element collecting other elements of the same diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    id: ElementId,
    #[serde(default)]
    members: Vec<ElementId>,
}

impl Group {
    /// Creates a group element with the given member element ids.
    pub fn new(id: ElementId, members: Vec<ElementId>) -> Self {
        Self { id, members }
    }

    /// Returns the diagram-local group id.
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Returns the member element ids.
    pub fn members(&self) -> &[ElementId] {
        &self.members
    }
}

fn default_line_style() -> String {
    "Line".to_string()
}

/// A line-shaped connection element.
///
/// Start and end are connection references to other elements of the same
/// diagram (or to junction points of other lines). Junction points carry
/// their own diagram-local ids that attaching lines reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    id: ElementId,
    #[serde(default)]
    start: Option<ElementId>,
    #[serde(default)]
    end: Option<ElementId>,
    #[serde(default = "default_line_style")]
    style: String,
    #[serde(default)]
    anchors: Vec<ElementId>,
}

impl Line {
    /// Creates a line element.
    pub fn new(
        id: ElementId,
        start: Option<ElementId>,
        end: Option<ElementId>,
        style: impl Into<String>,
        anchors: Vec<ElementId>,
    ) -> Self {
        Self {
            id,
            start,
            end,
            style: style.into(),
            anchors,
        }
    }

    /// Returns the diagram-local element id.
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Returns the start connection reference, if declared.
    pub fn start(&self) -> Option<&ElementId> {
        self.start.as_ref()
    }

    /// Returns the end connection reference, if declared.
    pub fn end(&self) -> Option<&ElementId> {
        self.end.as_ref()
    }

    /// Returns the line-start style name.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns the junction-point ids declared on this line, in order.
    pub fn anchors(&self) -> &[ElementId] {
        &self.anchors
    }
}

/// One element of a source diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum PathwayElement {
    DataNode(DataNode),
    Group(Group),
    Line(Line),
}

impl PathwayElement {
    /// Returns the diagram-local id of this element.
    pub fn local_id(&self) -> &ElementId {
        match self {
            Self::DataNode(node) => node.id(),
            Self::Group(group) => group.id(),
            Self::Line(line) => line.id(),
        }
    }
}

/// One source diagram: a display name and an ordered element list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pathway {
    name: String,
    #[serde(default)]
    elements: Vec<PathwayElement>,
}

impl Pathway {
    /// Creates a pathway from a display name and its elements.
    pub fn new(name: impl Into<String>, elements: Vec<PathwayElement>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    /// Returns the diagram's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered element list.
    pub fn elements(&self) -> &[PathwayElement] {
        &self.elements
    }

    /// Looks up an element by its diagram-local id.
    pub fn element(&self, id: &ElementId) -> Option<&PathwayElement> {
        self.elements.iter().find(|e| e.local_id() == id)
    }

    /// Iterates the line elements of this diagram.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.elements.iter().filter_map(|e| match e {
            PathwayElement::Line(line) => Some(line),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_code_passthrough() {
        let source = DataSource::new("Entrez Gene", Some("L".into()));
        assert_eq!(source.corrected_code(), Some("L"));
    }

    #[test]
    fn test_corrected_code_for_mislabeled_source() {
        let source = DataSource::new("Uniprot/TrEMBL", Some("Sp".into()));
        assert_eq!(source.corrected_code(), Some("S"));
    }

    #[test]
    fn test_corrected_code_missing() {
        let source = DataSource::new("Unknown", None);
        assert_eq!(source.corrected_code(), None);
    }

    #[test]
    fn test_element_lookup() {
        let pathway = Pathway::new(
            "Test",
            vec![
                PathwayElement::DataNode(DataNode::new(
                    ElementId::new("n1"),
                    DataNodeKind::GeneProduct,
                    "TP53",
                    None,
                )),
                PathwayElement::Line(Line::new(
                    ElementId::new("l1"),
                    Some(ElementId::new("n1")),
                    None,
                    "Arrow",
                    vec![],
                )),
            ],
        );

        assert!(matches!(
            pathway.element(&ElementId::new("n1")),
            Some(PathwayElement::DataNode(_))
        ));
        assert!(pathway.element(&ElementId::new("missing")).is_none());
        assert_eq!(pathway.lines().count(), 1);
    }

    #[test]
    fn test_deserialize_diagram() {
        let json = r#"{
            "name": "Apoptosis",
            "elements": [
                {
                    "element": "data_node",
                    "id": "n1",
                    "kind": "GeneProduct",
                    "label": "TP53",
                    "xref": {
                        "id": "ENSG001",
                        "data_source": { "full_name": "Ensembl", "system_code": "En" }
                    }
                },
                { "element": "group", "id": "g1", "members": ["n1"] },
                { "element": "line", "id": "l1", "start": "n1", "end": "g1" }
            ]
        }"#;

        let pathway: Pathway = serde_json::from_str(json).unwrap();
        assert_eq!(pathway.name(), "Apoptosis");
        assert_eq!(pathway.elements().len(), 3);

        let PathwayElement::Line(line) = pathway.element(&ElementId::new("l1")).unwrap() else {
            panic!("expected a line element");
        };
        assert_eq!(line.style(), "Line");
        assert!(line.anchors().is_empty());
    }

    #[test]
    fn test_unmodeled_kind_deserializes_to_other() {
        let json = r#"{ "element": "data_node", "id": "n1", "kind": "Rna" }"#;
        let element: PathwayElement = serde_json::from_str(json).unwrap();

        let PathwayElement::DataNode(node) = element else {
            panic!("expected a data node");
        };
        assert_eq!(node.kind(), DataNodeKind::Other);
    }
}
