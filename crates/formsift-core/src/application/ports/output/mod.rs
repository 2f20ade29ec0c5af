//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `formsift-adapters` crate provides implementations.

use crate::domain::TemplateDocument;
use crate::error::CoreResult;

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `formsift_adapters::InMemoryTemplateStore` (testing, embedding)
/// - `formsift_adapters::JsonDocumentStore` (on-disk document store)
///
/// ## Design Notes
///
/// - Documents come back with raw type names; checking them is the caller's job
/// - Implementations keep their own iteration order stable, the matcher
///   reports names in that order
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRepository: Send + Sync {
    /// Find all documents whose fields include every one of `keys`.
    ///
    /// Conjunctive: a document missing any key is left out. The `name`
    /// attribute is not a field.
    fn find_containing_all_keys(&self, keys: &[String]) -> CoreResult<Vec<TemplateDocument>>;

    /// List every stored document.
    fn list(&self) -> CoreResult<Vec<TemplateDocument>>;
}
