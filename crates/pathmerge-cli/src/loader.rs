//! Loading of source diagrams and resolver mapping tables.
//!
//! Diagrams arrive as serde-encoded files of the in-memory element model
//! (one JSON file per diagram); the native diagram syntax is handled by an
//! external converter and is not parsed here. Any file that fails to load
//! aborts the whole run, there is no per-diagram recovery.

use std::{fs, path::Path};

use log::{debug, info};

use pathmerge::MergeError;
use pathmerge_core::pathway::Pathway;
use pathmerge_core::resolver::{MappingFile, MappingTable, ResolverError};

/// Reads every `*.json` diagram file in the given directory.
///
/// Files are visited in lexicographic order so diagram indices (and with
/// them provenance and synthetic node keys) are reproducible across runs.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or any diagram file
/// fails to deserialize.
pub fn read_pathways(directory: &Path) -> Result<Vec<Pathway>, MergeError> {
    let mut files: Vec<_> = fs::read_dir(directory)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json")
        })
        .collect();
    files.sort();

    let mut pathways = Vec::with_capacity(files.len());
    for path in files {
        let content = fs::read_to_string(&path)?;
        let pathway: Pathway = serde_json::from_str(&content)
            .map_err(|err| MergeError::new_diagram_error(&path, err.to_string()))?;
        debug!(
            path = path.display().to_string(),
            name = pathway.name(),
            elements = pathway.elements().len();
            "Loaded diagram"
        );
        pathways.push(pathway);
    }

    info!(
        directory = directory.display().to_string(),
        diagram_count = pathways.len();
        "Diagrams loaded"
    );
    Ok(pathways)
}

/// Loads an identifier mapping table from a serde-encoded file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialized; a broken
/// resolver backend aborts the run.
pub fn load_mapping_table(path: &Path) -> Result<MappingTable, MergeError> {
    let content = fs::read_to_string(path).map_err(|err| {
        ResolverError::backend(format!("cannot read mapping file {}: {err}", path.display()))
    })?;
    let file: MappingFile = serde_json::from_str(&content).map_err(|err| {
        ResolverError::backend(format!("malformed mapping file {}: {err}", path.display()))
    })?;

    debug!(
        path = path.display().to_string(),
        mappings = file.mappings.len(),
        symbols = file.symbols.len();
        "Loaded mapping table"
    );
    Ok(MappingTable::from(file))
}
