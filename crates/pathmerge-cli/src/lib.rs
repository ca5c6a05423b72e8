//! CLI logic for the pathmerge tool.
//!
//! This module contains the core CLI logic for the pathmerge tool.

pub mod loader;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use pathmerge::export::{Exporter, xgmml::XgmmlExporter};
use pathmerge::{MergeError, NetworkBuilder};

/// Run the pathmerge CLI application
///
/// This function merges the diagrams found in the input directory into one
/// network and writes the resulting XGMML to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MergeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Diagram loading errors
/// - Resolver backend failures
pub fn run(args: &Args) -> Result<(), MergeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Merging pathway diagrams"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Load source diagrams and resolver backends
    let pathways = loader::read_pathways(Path::new(&args.input))?;

    let mut builder = NetworkBuilder::new();
    if let Some(title) = app_config.graph().title() {
        builder = builder.with_title(title);
    }
    if let Some(path) = app_config.resolver().gene() {
        builder = builder.with_gene_resolver(loader::load_mapping_table(path)?);
    }
    if let Some(path) = app_config.resolver().metabolite() {
        builder = builder.with_metabolite_resolver(loader::load_mapping_table(path)?);
    }

    // Merge and export
    let graph = builder.merge(&pathways)?;

    let mut out = BufWriter::new(File::create(&args.output)?);
    XgmmlExporter::new().export(&graph, &mut out)?;
    out.flush()?;

    info!(output_file = args.output; "Network exported successfully");

    Ok(())
}
