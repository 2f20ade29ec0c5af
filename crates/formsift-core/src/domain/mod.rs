// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for formsift.
//!
//! This module contains pure matching and validation logic. Template storage
//! is reached only through the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Templates never change after construction
//! - **Total validators**: field checks answer `bool`, they never fail
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod validators;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    field_set::FieldSet,
    template::{NAME_ATTRIBUTE, Template, TemplateBuilder, TemplateDocument},
};

pub use error::{DomainError, ErrorCategory};

pub use validators::DomainNameError;
pub use value_objects::FieldType;
