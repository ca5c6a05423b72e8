//! Error types for merge operations.
//!
//! This module provides the main error type [`MergeError`] which wraps the
//! failure conditions of a merge run. All of them are fatal: a run either
//! completes or aborts on the first unhandled failure, and no partial
//! output is produced.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use pathmerge_core::resolver::ResolverError;

/// The main error type for merge operations.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("identifier resolution failed: {0}")]
    Resolver(#[from] ResolverError),

    #[error("failed to load diagram {path}: {message}")]
    Diagram { path: PathBuf, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl MergeError {
    /// Creates a diagram load error for the given file.
    pub fn new_diagram_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Diagram {
            path: path.into(),
            message: message.into(),
        }
    }
}
