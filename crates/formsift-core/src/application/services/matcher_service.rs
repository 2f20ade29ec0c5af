//! Template Matcher - finds the templates a field set belongs to.
//!
//! The workflow:
//! 1. Ask the repository for documents holding every submitted key
//! 2. Check each candidate document into a `Template`
//! 3. Drop candidates whose field count differs (exact key-set equality)
//! 4. Keep candidates whose declared types accept every submitted value
//!
//! Names come back in repository order.

use tracing::{debug, instrument, trace};

use crate::{
    application::ports::TemplateRepository,
    domain::{DomainError, FieldSet, Template},
    error::CoreResult,
};

/// Matching service.
pub struct TemplateMatcher {
    repository: Box<dyn TemplateRepository>,
}

impl TemplateMatcher {
    /// Create a matcher over the given repository.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use formsift_core::application::TemplateMatcher;
    /// use formsift_core::domain::FieldSet;
    /// # fn repo() -> Box<dyn formsift_core::application::TemplateRepository> { unimplemented!() }
    ///
    /// let matcher = TemplateMatcher::new(repo());
    /// let fields = FieldSet::new().with("login", "user@mail.ru");
    /// let names = matcher.find_matching_templates(&fields)?;
    /// # Ok::<(), formsift_core::error::CoreError>(())
    /// ```
    pub fn new(repository: Box<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    /// Names of every stored template the field set belongs to.
    ///
    /// An empty result is not an error. An empty field set is:
    /// no template has zero fields, so the call cannot be meaningful.
    #[instrument(skip_all, fields(fields = fields.len()))]
    pub fn find_matching_templates(&self, fields: &FieldSet) -> CoreResult<Vec<String>> {
        if fields.is_empty() {
            return Err(DomainError::EmptyFieldSet.into());
        }

        let keys: Vec<String> = fields.keys().map(str::to_owned).collect();
        let candidates = self.repository.find_containing_all_keys(&keys)?;
        debug!(candidates = candidates.len(), "Candidates fetched");

        let mut names = Vec::new();
        for document in candidates {
            let template = Template::try_from(document)?;

            if template.arity() != fields.len() {
                trace!(
                    template = template.name(),
                    arity = template.arity(),
                    "Rejected: field count differs"
                );
                continue;
            }

            if template.matches(fields) {
                debug!(template = template.name(), "Template matched");
                names.push(template.name().to_owned());
            } else {
                trace!(template = template.name(), "Rejected: value failed its type");
            }
        }

        Ok(names)
    }
}
