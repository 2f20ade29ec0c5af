//! Structural validation of DNS domain names.
//!
//! Rules are checked in a fixed order and the first failing rule is reported.
//! Only ASCII labels are accepted, so internationalized names fail on the
//! character-class rule.

use thiserror::Error;

/// Maximum length of a whole domain name.
pub const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Top-level domains that never route on the public internet.
pub const RESERVED_TLDS: [&str; 3] = ["test", "localhost", "example"];

/// Why a domain name was rejected.
///
/// The message is diagnostic only; matching logic looks at the verdict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainNameError {
    #[error("Domain cannot be empty")]
    Empty,

    #[error("Domain exceeds maximum length (253 chars)")]
    TooLong,

    #[error("Domain must have at least one subdomain and TLD")]
    MissingTld,

    #[error("Empty subdomain (consecutive dots)")]
    EmptyLabel,

    #[error("Subdomain '{0}' exceeds maximum length (63 chars)")]
    LabelTooLong(String),

    #[error("Subdomain '{0}' contains invalid characters")]
    InvalidCharacters(String),

    #[error("Subdomain '{0}' cannot start/end with hyphen")]
    HyphenBoundary(String),

    #[error("TLD must contain only letters")]
    TldNotAlphabetic,

    #[error("TLD must be at least 2 characters")]
    TldTooShort,

    #[error("Reserved TLD: {0}")]
    ReservedTld(String),
}

/// Validate a domain name. Comparison is case-insensitive and surrounding
/// whitespace is ignored.
pub fn validate(domain: &str) -> Result<(), DomainNameError> {
    if domain.is_empty() {
        return Err(DomainNameError::Empty);
    }
    let domain = domain.trim().to_lowercase();

    if domain.chars().count() > MAX_DOMAIN_LEN {
        return Err(DomainNameError::TooLong);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(DomainNameError::MissingTld);
    }

    for label in &labels {
        check_label(label)?;
    }

    let tld = labels.last().copied().unwrap_or_default();
    if !tld.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(DomainNameError::TldNotAlphabetic);
    }
    if tld.len() < 2 {
        return Err(DomainNameError::TldTooShort);
    }
    if RESERVED_TLDS.contains(&tld) {
        return Err(DomainNameError::ReservedTld(tld.to_owned()));
    }

    Ok(())
}

/// Verdict-only form of [`validate`].
pub fn is_valid_domain(domain: &str) -> bool {
    validate(domain).is_ok()
}

fn check_label(label: &str) -> Result<(), DomainNameError> {
    if label.is_empty() {
        return Err(DomainNameError::EmptyLabel);
    }
    if label.chars().count() > MAX_LABEL_LEN {
        return Err(DomainNameError::LabelTooLong(label.to_owned()));
    }
    let allowed = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-';
    if !label.is_ascii() || !label.bytes().all(allowed) {
        return Err(DomainNameError::InvalidCharacters(label.to_owned()));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(DomainNameError::HyphenBoundary(label.to_owned()));
    }
    Ok(())
}
