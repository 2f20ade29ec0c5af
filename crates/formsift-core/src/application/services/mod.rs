//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "which templates fit these fields".

pub mod matcher_service;
pub mod template_service;

pub use matcher_service::TemplateMatcher;
pub use template_service::TemplateCatalog;
