//! In-memory template store.

use std::sync::{Arc, RwLock};

use formsift_core::{
    application::{ApplicationError, ports::TemplateRepository},
    domain::{Template, TemplateDocument},
    error::CoreResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
///
/// Documents are kept in insertion order; queries report them in that order.
/// Clones share the same documents.
#[derive(Clone, Default)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<Vec<TemplateDocument>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `documents`, unchecked.
    ///
    /// Malformed documents are kept so that integrity errors surface where
    /// the engine reads them.
    pub fn with_documents(documents: Vec<TemplateDocument>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(documents)),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> Self {
        Self::with_documents(builtin_templates::all_documents())
    }

    /// Add a template at the end of the store.
    pub fn insert(&self, template: &Template) -> CoreResult<()> {
        template.validate()?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.push(TemplateDocument::from(template));
        Ok(())
    }

    /// Get the number of documents.
    pub fn len(&self) -> CoreResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clear all documents.
    pub fn clear(&self) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl TemplateRepository for InMemoryTemplateStore {
    fn find_containing_all_keys(&self, keys: &[String]) -> CoreResult<Vec<TemplateDocument>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .iter()
            .filter(|doc| doc.contains_all_keys(keys))
            .cloned()
            .collect())
    }

    fn list(&self) -> CoreResult<Vec<TemplateDocument>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.clone())
    }
}
