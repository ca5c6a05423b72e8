//! Configuration types for merge runs.
//!
//! This module provides the configuration structures that control a merge
//! run. All types implement [`serde::Deserialize`] for flexible loading
//! from external sources (the CLI loads them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining resolver and graph settings.
//! - [`ResolverConfig`] - Locations of the identifier mapping backends.
//! - [`GraphConfig`] - Output graph settings such as the title.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration combining resolver and graph settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Resolver backend configuration section.
    #[serde(default)]
    resolver: ResolverConfig,

    /// Output graph configuration section.
    #[serde(default)]
    graph: GraphConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(resolver: ResolverConfig, graph: GraphConfig) -> Self {
        Self { resolver, graph }
    }

    /// Returns the resolver configuration.
    pub fn resolver(&self) -> &ResolverConfig {
        &self.resolver
    }

    /// Returns the graph configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }
}

/// Locations of the identifier mapping backends, one per naming system.
///
/// A missing entry means no resolver is configured for that kind; affected
/// elements keep their native identifiers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolverConfig {
    /// Mapping file unifying gene and protein identifiers.
    #[serde(default)]
    gene: Option<PathBuf>,

    /// Mapping file unifying metabolite identifiers.
    #[serde(default)]
    metabolite: Option<PathBuf>,
}

impl ResolverConfig {
    /// Creates a new [`ResolverConfig`] from optional mapping file paths.
    pub fn new(gene: Option<PathBuf>, metabolite: Option<PathBuf>) -> Self {
        Self { gene, metabolite }
    }

    /// Returns the gene mapping file path, if configured.
    pub fn gene(&self) -> Option<&Path> {
        self.gene.as_deref()
    }

    /// Returns the metabolite mapping file path, if configured.
    pub fn metabolite(&self) -> Option<&Path> {
        self.metabolite.as_deref()
    }
}

/// Output graph settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphConfig {
    /// Title of the merged graph, carried into the export root element.
    #[serde(default)]
    title: Option<String>,
}

impl GraphConfig {
    /// Creates a new [`GraphConfig`] with an optional title.
    pub fn new(title: Option<String>) -> Self {
        Self { title }
    }

    /// Returns the configured graph title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
