// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Validation *failures* of field values are never errors; validators answer
/// with `false`. The variants here describe broken data or broken calls:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Integrity Errors (stored data is malformed)
    // ========================================================================
    #[error("template '{template}' declares field '{field}' with unknown type '{type_name}'")]
    UnknownFieldType {
        template: String,
        field: String,
        type_name: String,
    },

    #[error("unknown field type '{0}'")]
    UnrecognizedFieldType(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    // ========================================================================
    // Precondition Violations
    // ========================================================================
    #[error("No fields provided")]
    EmptyFieldSet,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFieldType {
                template,
                type_name,
                ..
            } => vec![
                format!("Template '{}' is corrupted: '{}' is not a field type", template, type_name),
                "Supported field types: text, email, phone, date".into(),
                "Fix the template document or re-seed the store: formsift init --force".into(),
            ],
            Self::UnrecognizedFieldType(name) => vec![
                format!("'{}' is not a field type", name),
                "Supported field types: text, email, phone, date".into(),
            ],
            Self::InvalidTemplate(msg) => vec![
                "A stored template is malformed".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyFieldSet => vec![
                "Pass at least one field".into(),
                "Example: formsift get_tpl --f_login=user@mail.ru".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyFieldSet | Self::UnrecognizedFieldType(_) => ErrorCategory::Validation,
            Self::UnknownFieldType { .. } | Self::InvalidTemplate(_) => ErrorCategory::Integrity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Integrity,
}
