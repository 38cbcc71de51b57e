//! Token-level text comparison
//!
//! This crate computes and renders the differences between two tokenized
//! texts, organized into three layers:
//!
//! - `artifacts`: core data types and algorithms (Myers diff, tokenizers)
//! - `areas`: workspace file access and the diff session
//! - `commands`: user-facing command implementations

pub mod areas;
pub mod artifacts;
pub mod commands;
