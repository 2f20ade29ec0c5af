//! Application layer errors.
//!
//! These errors represent failures in orchestration and storage access, not
//! in the data being matched. Data errors are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while reaching templates through a repository.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The repository could not be read or written.
    #[error("Template repository unavailable: {reason}")]
    RepositoryUnavailable { reason: String },

    /// A stored document does not have the shape of a template.
    #[error("Stored document '{id}' is corrupt: {reason}")]
    CorruptDocument { id: String, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RepositoryUnavailable { reason } => vec![
                format!("Could not access the template store: {}", reason),
                "Check the --store path or the store.path config key".into(),
                "Create a store with sample templates: formsift init".into(),
            ],
            Self::CorruptDocument { id, .. } => vec![
                format!("Document '{}' is malformed", id),
                "Every attribute must be a string and 'name' is required".into(),
                "Re-seed the store: formsift init --force".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RepositoryUnavailable { .. } => ErrorCategory::Configuration,
            Self::CorruptDocument { .. } => ErrorCategory::Integrity,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
