//! Template Catalog - read access to stored templates.
//!
//! Separated from TemplateMatcher for single responsibility.

use tracing::instrument;

use crate::{
    application::ports::TemplateRepository,
    domain::Template,
    error::CoreResult,
};

/// Service for browsing templates.
pub struct TemplateCatalog {
    repository: Box<dyn TemplateRepository>,
}

impl TemplateCatalog {
    /// Create a new catalog.
    pub fn new(repository: Box<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    /// List all templates, checked into domain form.
    ///
    /// Fails on the first stored document that is not a valid template.
    #[instrument(skip_all)]
    pub fn list(&self) -> CoreResult<Vec<Template>> {
        self.repository
            .list()?
            .into_iter()
            .map(|doc| Template::try_from(doc).map_err(Into::into))
            .collect()
    }
}
