//! Template domain aggregate.
//!
//! A template is a named form schema: a fixed set of field names, each with the
//! [`FieldType`] its values must satisfy.
//!
//! ## Two Shapes
//!
//! ```text
//! ┌──────────────────────────┐  TryFrom   ┌──────────────────────────┐
//! │ TemplateDocument         │ ─────────▶ │ Template                 │
//! │  name: String            │            │  name: String            │
//! │  fields: name -> "email" │            │  fields: name -> Email   │
//! └──────────────────────────┘            └──────────────────────────┘
//!   what a repository stores                what the matcher reasons on
//! ```
//!
//! Repositories hand out [`TemplateDocument`]s with raw type names. Turning
//! one into a [`Template`] is where stored data gets checked: an unknown type
//! name is an integrity error, never a silent non-match.
//!
//! The `name` attribute identifies a template and is never one of its fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::field_set::FieldSet, error::DomainError, value_objects::FieldType,
};

/// Attribute holding a template's name in stored documents.
pub const NAME_ATTRIBUTE: &str = "name";

// ============================================================================
// TemplateDocument
// ============================================================================

/// A template as persisted: name plus field-name → stored type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub name: String,
    pub fields: BTreeMap<String, String>,
}

impl TemplateDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field with its stored type name.
    pub fn with_field(mut self, field: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.insert(field.into(), type_name.into());
        self
    }

    /// Whether every key exists among this document's fields.
    ///
    /// The `name` attribute is not a field, so asking for `"name"` never
    /// matches.
    pub fn contains_all_keys<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        keys.iter().all(|key| self.fields.contains_key(key.as_ref()))
    }
}

impl From<&Template> for TemplateDocument {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            fields: template
                .fields
                .iter()
                .map(|(field, ty)| (field.clone(), ty.as_str().to_owned()))
                .collect(),
        }
    }
}

// ============================================================================
// Template (Aggregate Root)
// ============================================================================

/// A named form schema.
///
/// ## Invariants
///
/// 1. At least one field
/// 2. No field is called `name`
/// 3. Field set is fixed once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    fields: BTreeMap<String, FieldType>,
}

impl Template {
    /// Start the builder pattern for fluent construction.
    ///
    /// # Example
    /// ```rust
    /// use formsift_core::domain::{FieldType, Template};
    ///
    /// let template = Template::builder("Данные пользователя")
    ///     .field("login", FieldType::Email)
    ///     .field("tel", FieldType::Phone)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(template.arity(), 2);
    /// ```
    pub fn builder(name: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldType> {
        &self.fields
    }

    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.fields.get(field).copied()
    }

    /// Number of fields, the `name` attribute excluded.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Whether both sides declare exactly the same field names.
    pub fn has_same_keys(&self, fields: &FieldSet) -> bool {
        self.arity() == fields.len() && fields.keys().all(|key| self.fields.contains_key(key))
    }

    /// Whether a field set belongs to this template: same field names, and
    /// every value accepted by the declared type.
    pub fn matches(&self, fields: &FieldSet) -> bool {
        self.has_same_keys(fields) && self.accepts_values(fields)
    }

    /// Whether each declared field's type accepts the supplied value.
    ///
    /// Fields missing from `fields` fail their type check.
    pub fn accepts_values(&self, fields: &FieldSet) -> bool {
        self.fields
            .iter()
            .all(|(field, ty)| ty.validate(fields.get(field)))
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        // Invariant 1: Must have something to match against
        if self.fields.is_empty() {
            return Err(DomainError::InvalidTemplate(format!(
                "template '{}' declares no fields",
                self.name
            )));
        }

        // Invariant 2: `name` identifies the template, it is not a field
        if self.fields.contains_key(NAME_ATTRIBUTE) {
            return Err(DomainError::InvalidTemplate(format!(
                "template '{}' uses the reserved field name '{}'",
                self.name, NAME_ATTRIBUTE
            )));
        }

        Ok(())
    }
}

impl TryFrom<TemplateDocument> for Template {
    type Error = DomainError;

    fn try_from(document: TemplateDocument) -> Result<Self, Self::Error> {
        let mut fields = BTreeMap::new();
        for (field, type_name) in document.fields {
            let ty = type_name
                .parse::<FieldType>()
                .map_err(|_| DomainError::UnknownFieldType {
                    template: document.name.clone(),
                    field: field.clone(),
                    type_name: type_name.clone(),
                })?;
            fields.insert(field, ty);
        }

        let template = Self {
            name: document.name,
            fields,
        };
        template.validate()?;
        Ok(template)
    }
}

/// Builder for constructing templates with validation.
///
/// Validation happens at `build()`, not in the setters.
pub struct TemplateBuilder {
    name: String,
    fields: BTreeMap<String, FieldType>,
}

impl TemplateBuilder {
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    pub fn build(self) -> Result<Template, DomainError> {
        let template = Template {
            name: self.name,
            fields: self.fields,
        };
        template.validate()?;
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_data() -> Template {
        Template::builder("Данные пользователя")
            .field("login", FieldType::Email)
            .field("tel", FieldType::Phone)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_rejects_empty_schema() {
        let err = Template::builder("empty").build().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTemplate(_)));
    }

    #[test]
    fn builder_rejects_name_as_field() {
        let err = Template::builder("odd")
            .field("name", FieldType::Text)
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTemplate(_)));
    }

    #[test]
    fn document_converts_with_known_types() {
        let doc = TemplateDocument::new("Проба")
            .with_field("f_name1", "email")
            .with_field("f_name2", "date");
        let template = Template::try_from(doc).unwrap();

        assert_eq!(template.name(), "Проба");
        assert_eq!(template.field_type("f_name1"), Some(FieldType::Email));
        assert_eq!(template.field_type("f_name2"), Some(FieldType::Date));
        assert_eq!(template.field_type("name"), None);
    }

    #[test]
    fn unknown_stored_type_is_an_integrity_error() {
        let doc = TemplateDocument::new("Broken").with_field("age", "number");
        assert_eq!(
            Template::try_from(doc),
            Err(DomainError::UnknownFieldType {
                template: "Broken".into(),
                field: "age".into(),
                type_name: "number".into(),
            })
        );
    }

    #[test]
    fn document_round_trips_through_template() {
        let template = user_data();
        let doc = TemplateDocument::from(&template);
        assert_eq!(doc.fields.get("login").map(String::as_str), Some("email"));
        assert_eq!(Template::try_from(doc).unwrap(), template);
    }

    #[test]
    fn contains_all_keys_ignores_name_attribute() {
        let doc = TemplateDocument::from(&user_data());
        assert!(doc.contains_all_keys(&["login"]));
        assert!(doc.contains_all_keys(&["login", "tel"]));
        assert!(!doc.contains_all_keys(&["login", "email"]));
        assert!(!doc.contains_all_keys(&["name"]));
    }

    #[test]
    fn matches_requires_exact_keys_and_valid_values() {
        let template = user_data();

        let exact: FieldSet = [("login", "x@y.com"), ("tel", "+7 903 123 45 78")]
            .into_iter()
            .collect();
        assert!(template.matches(&exact));

        let subset: FieldSet = [("login", "x@y.com")].into_iter().collect();
        assert!(!template.matches(&subset));

        let superset: FieldSet = [
            ("login", "x@y.com"),
            ("tel", "+7 903 123 45 78"),
            ("extra", "1"),
        ]
        .into_iter()
        .collect();
        assert!(!template.matches(&superset));

        let bad_phone: FieldSet = [("login", "x@y.com"), ("tel", "89031234578")]
            .into_iter()
            .collect();
        assert!(template.has_same_keys(&bad_phone));
        assert!(!template.matches(&bad_phone));
    }

    #[test]
    fn same_arity_different_keys_do_not_match() {
        let template = user_data();
        let other: FieldSet = [("login", "x@y.com"), ("phone", "+7 903 123 45 78")]
            .into_iter()
            .collect();
        assert!(!template.has_same_keys(&other));
    }
}
