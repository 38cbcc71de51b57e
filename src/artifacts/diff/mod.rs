//! Myers diff algorithm and report rendering
//!
//! The pipeline runs in four stages:
//!
//! - `middle_snake`: bidirectional search for the optimal split point
//! - `decomposition`: recursive labeling of matched runs across both
//!   sequences
//! - `edit_script`: derivation of the linear edit script, distance and
//!   largest common subsequence from the labeling
//! - `render`: unified/context/normal report formatting
//!
//! `snake` holds the value types shared by all stages.

pub mod decomposition;
pub mod edit_script;
pub mod middle_snake;
pub mod render;
pub mod snake;
