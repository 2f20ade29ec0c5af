//! formsift Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for formsift, a tool
//! that tells which form templates a set of fields belongs to, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          formsift-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (TemplateMatcher, TemplateCatalog)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: TemplateRepository)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   formsift-adapters (Infrastructure)    │
//! │  (InMemoryTemplateStore,                │
//! │   JsonDocumentStore)                    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (FieldType, Template, validators)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use formsift_core::{application::TemplateMatcher, domain::FieldSet};
//! # fn repo() -> Box<dyn formsift_core::application::TemplateRepository> { unimplemented!() }
//!
//! // 1. Collect the submitted fields
//! let fields = FieldSet::new()
//!     .with("login", "user@mail.ru")
//!     .with("tel", "+7 903 123 45 78");
//!
//! // 2. Match them against the injected repository
//! let matcher = TemplateMatcher::new(repo());
//! let names = matcher.find_matching_templates(&fields).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{TemplateCatalog, TemplateMatcher, ports::TemplateRepository};
    pub use crate::domain::{FieldSet, FieldType, Template, TemplateDocument};
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
