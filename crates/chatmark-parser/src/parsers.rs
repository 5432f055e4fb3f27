//! Single-purpose scanners used by the block assembler and the engine.
//!
//! - [`fences`] splits a message into prose spans and code blocks
//! - [`inline`] scans one prose line into inline nodes
//! - `lines` classifies one prose line (heading, rule, list item, blank, plain)

pub mod fences;
pub mod inline;
pub(crate) mod lines;
