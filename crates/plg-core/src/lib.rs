//! # plg-core
//!
//! Core types and error types for the Parallel Life Generator.
//!
//! This crate provides the foundational types shared across all plg crates:
//! - Entity structs for the decision tree (decisions, context blocks, branch nodes)
//! - The annotation tag record and polarity-tagged tradeoffs
//! - Export format and context question enums
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod tags;
pub mod tradeoff;
