//! Built-in sample templates.
//!
//! [`all_documents`] returns the templates a fresh store is seeded with by
//! `formsift init`. Order matters: stores report matches in insertion order.

use formsift_core::domain::TemplateDocument;

// ── Public API ────────────────────────────────────────────────────────────────

/// Every built-in template, in seeding order.
pub fn all_documents() -> Vec<TemplateDocument> {
    vec![
        user_data(),
        order_form(),
        probe(),
        probe_two(),
        user_data_with_order(),
    ]
}

// ── Templates ─────────────────────────────────────────────────────────────────

/// Login plus phone.
pub fn user_data() -> TemplateDocument {
    TemplateDocument::new("Данные пользователя")
        .with_field("login", "email")
        .with_field("tel", "phone")
}

pub fn order_form() -> TemplateDocument {
    TemplateDocument::new("Форма заказа")
        .with_field("customer", "text")
        .with_field("order_id", "text")
        .with_field("order_date", "date")
        .with_field("contact", "phone")
}

pub fn probe() -> TemplateDocument {
    TemplateDocument::new("Проба")
        .with_field("f_name1", "email")
        .with_field("f_name2", "date")
}

pub fn probe_two() -> TemplateDocument {
    TemplateDocument::new("Проба2")
        .with_field("login", "email")
        .with_field("order_date", "date")
}

/// Same display name as [`user_data`] but with a leading space, and a
/// different schema.
pub fn user_data_with_order() -> TemplateDocument {
    TemplateDocument::new(" Данные пользователя")
        .with_field("login", "email")
        .with_field("order_id", "text")
        .with_field("contact", "phone")
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsift_core::domain::Template;

    #[test]
    fn every_builtin_is_a_valid_template() {
        for doc in all_documents() {
            let name = doc.name.clone();
            assert!(Template::try_from(doc).is_ok(), "{name} is invalid");
        }
    }

    #[test]
    fn names_are_unique() {
        let docs = all_documents();
        let mut names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), docs.len());
    }
}
