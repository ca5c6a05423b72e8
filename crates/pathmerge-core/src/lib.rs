//! Pathmerge Core Types and Definitions
//!
//! This crate provides the foundational types for the pathmerge pathway
//! network merger. It includes:
//!
//! - **Identifiers**: Stable node and edge keys ([`identifier`] module)
//! - **Attributes**: Generic string attributes shared by graph entities
//!   ([`attribute::Attributes`])
//! - **Provenance**: Contributing-diagram tracking ([`provenance::Provenance`])
//! - **Graph**: The merged network model ([`graph`] module)
//! - **Pathway**: The source diagram element model ([`pathway`] module)
//! - **Resolver**: The identifier unification contract ([`resolver`] module)

pub mod attribute;
pub mod graph;
pub mod identifier;
pub mod pathway;
pub mod provenance;
pub mod resolver;
