//! The identifier unification contract.
//!
//! Canonical-identifier resolution is backed by an external service in a
//! full deployment. The merge engine only depends on the [`IdResolver`]
//! trait; this module also ships [`MappingTable`], an in-memory
//! implementation built from a serde-loadable [`MappingFile`] that stands
//! in for such a backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pathway::Xref;

/// A failure in the resolver backend (connectivity, corrupt database).
///
/// Resolver failures abort the run; a partially resolved merge is not safe
/// to export.
#[derive(Debug, Error)]
#[error("resolver backend failure: {0}")]
pub struct ResolverError(String);

impl ResolverError {
    /// Creates a resolver error with the given backend message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Resolution of identifiers into a target naming system.
///
/// Implementations must return candidates in a deterministic order: the
/// merge engine takes the first candidate, and reproducible merges depend
/// on that choice being stable across runs.
pub trait IdResolver {
    /// Maps a source cross-reference to zero or more candidate
    /// cross-references in the target naming system.
    fn resolve(&self, source: &Xref, target_system: &str) -> Result<Vec<Xref>, ResolverError>;

    /// Looks up a human-readable symbol for the given cross-reference.
    fn symbol_of(&self, xref: &Xref) -> Result<Option<String>, ResolverError>;
}

/// One source-to-targets identifier mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mapping {
    pub source: Xref,
    pub targets: Vec<Xref>,
}

/// One symbol annotation for a cross-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub xref: Xref,
    pub symbol: String,
}

/// The serde representation of a mapping-table file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingFile {
    #[serde(default)]
    pub mappings: Vec<Mapping>,
    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
}

/// Lookup key: corrected system code plus identifier.
type XrefKey = (String, String);

fn xref_key(xref: &Xref) -> Option<XrefKey> {
    let code = xref.data_source().corrected_code()?;
    Some((code.to_string(), xref.id().to_string()))
}

/// An in-memory [`IdResolver`] implementation.
///
/// Candidate ordering follows the order of the mapping file, which makes
/// resolution deterministic.
#[derive(Debug, Default)]
pub struct MappingTable {
    mappings: HashMap<XrefKey, Vec<Xref>>,
    symbols: HashMap<XrefKey, String>,
}

impl From<MappingFile> for MappingTable {
    fn from(file: MappingFile) -> Self {
        let mut table = Self::default();
        for mapping in file.mappings {
            let Some(key) = xref_key(&mapping.source) else {
                continue;
            };
            table.mappings.entry(key).or_default().extend(mapping.targets);
        }
        for entry in file.symbols {
            let Some(key) = xref_key(&entry.xref) else {
                continue;
            };
            table.symbols.insert(key, entry.symbol);
        }
        table
    }
}

impl IdResolver for MappingTable {
    fn resolve(&self, source: &Xref, target_system: &str) -> Result<Vec<Xref>, ResolverError> {
        let Some(key) = xref_key(source) else {
            return Ok(Vec::new());
        };
        let candidates = self
            .mappings
            .get(&key)
            .map(|targets| {
                targets
                    .iter()
                    .filter(|t| t.data_source().corrected_code() == Some(target_system))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(candidates)
    }

    fn symbol_of(&self, xref: &Xref) -> Result<Option<String>, ResolverError> {
        let Some(key) = xref_key(xref) else {
            return Ok(None);
        };
        Ok(self.symbols.get(&key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathway::DataSource;

    fn xref(id: &str, name: &str, code: &str) -> Xref {
        Xref::new(id, DataSource::new(name, Some(code.to_string())))
    }

    fn table() -> MappingTable {
        MappingTable::from(MappingFile {
            mappings: vec![Mapping {
                source: xref("1234", "Entrez Gene", "L"),
                targets: vec![
                    xref("ENSG001", "Ensembl", "En"),
                    xref("ENSG002", "Ensembl", "En"),
                    xref("P04637", "Uniprot-TrEMBL", "S"),
                ],
            }],
            symbols: vec![SymbolEntry {
                xref: xref("ENSG001", "Ensembl", "En"),
                symbol: "TP53".to_string(),
            }],
        })
    }

    #[test]
    fn test_resolve_filters_by_target_system() {
        let table = table();
        let candidates = table.resolve(&xref("1234", "Entrez Gene", "L"), "En").unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id(), "ENSG001");
    }

    #[test]
    fn test_resolve_unknown_source_is_empty() {
        let table = table();
        let candidates = table.resolve(&xref("9999", "Entrez Gene", "L"), "En").unwrap();

        assert!(candidates.is_empty());
    }

    #[test]
    fn test_resolve_keys_on_corrected_code() {
        // An xref labeled with the legacy full name resolves as if it
        // carried the SwissProt code.
        let table = MappingTable::from(MappingFile {
            mappings: vec![Mapping {
                source: xref("P04637", "Uniprot-TrEMBL", "S"),
                targets: vec![xref("ENSG001", "Ensembl", "En")],
            }],
            symbols: vec![],
        });

        let legacy = Xref::new(
            "P04637",
            DataSource::new("Uniprot/TrEMBL", Some("Sp".to_string())),
        );
        let candidates = table.resolve(&legacy, "En").unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_symbol_lookup() {
        let table = table();

        let symbol = table.symbol_of(&xref("ENSG001", "Ensembl", "En")).unwrap();
        assert_eq!(symbol.as_deref(), Some("TP53"));

        let missing = table.symbol_of(&xref("ENSG002", "Ensembl", "En")).unwrap();
        assert!(missing.is_none());
    }
}
