//! Session-level components
//!
//! This module contains the building blocks around the diff core:
//!
//! - `workspace`: source file access
//! - `session`: the diff session owning the tokenizer and both token
//!   sequences

pub mod session;
pub mod workspace;
