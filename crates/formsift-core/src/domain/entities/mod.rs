pub mod field_set;
pub mod template;

pub use crate::domain::DomainError;
pub use field_set::FieldSet;
pub use template::{NAME_ATTRIBUTE, Template, TemplateBuilder, TemplateDocument};
