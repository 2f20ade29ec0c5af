//! Infrastructure adapters for formsift.
//!
//! This crate implements the ports defined in `formsift-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod template_store;

// Re-export commonly used adapters
pub use template_store::{InMemoryTemplateStore, JsonDocumentStore};
