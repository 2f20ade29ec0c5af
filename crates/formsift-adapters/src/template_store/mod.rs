//! Template repositories.

pub mod json;
pub mod memory;

pub use json::JsonDocumentStore;
pub use memory::InMemoryTemplateStore;
