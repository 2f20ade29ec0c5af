//! Application layer for formsift.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TemplateMatcher, TemplateCatalog)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All of those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{TemplateCatalog, TemplateMatcher};

// Re-export port traits (for adapter implementation)
pub use ports::TemplateRepository;

pub use error::ApplicationError;
