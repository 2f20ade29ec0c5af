//! Domain value objects: FieldType.
//!
//! # Design
//!
//! `FieldType` is a pure `Copy` value type.
//! The string names are the ones stored in template documents and are
//! matched case-sensitively.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a validator in `validators/` and its arm in `FieldType::validate`

use crate::domain::error::DomainError;
use crate::domain::validators;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FieldType ────────────────────────────────────────────────────────────────

/// The type a template requires for one of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Date,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [Self::Text, Self::Email, Self::Phone, Self::Date];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
        }
    }

    /// Whether `value` is acceptable for a field of this type.
    ///
    /// `None` stands for a value the caller never supplied and always fails.
    pub fn validate(self, value: Option<&str>) -> bool {
        match self {
            Self::Text => validators::text::validate(value),
            Self::Email => validators::email::validate(value),
            Self::Phone => validators::phone::validate(value),
            Self::Date => validators::date::validate(value),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "date" => Ok(Self::Date),
            other => Err(DomainError::UnrecognizedFieldType(other.to_owned())),
        }
    }
}
