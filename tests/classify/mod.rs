//! Classifier tests
//!
//! End-to-end classification through the public API:
//! - Tree-backed dispatch on the shared sketch
//! - The text-only message surface

pub mod tests_classification;
pub mod tests_messages;
