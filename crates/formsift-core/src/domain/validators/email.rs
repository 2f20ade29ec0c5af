//! Email address validation.
//!
//! The address must match a conservative shape first. Domains made only of
//! digits and dots are then checked as four decimal octets (leading zeros
//! allowed), everything else goes through [`domain_name::validate`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::domain_name;

/// Local part, `@`, then a DNS-style name or a dotted quad.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9._%+-]+@([a-zA-Z0-9.-]+\.[a-zA-Z]{2,}|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})$",
    )
    .expect("email pattern is a valid regex")
});

/// Validate an optional value as an email address.
pub fn validate(value: Option<&str>) -> bool {
    value.is_some_and(is_valid_email)
}

/// Validate an email address.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || !EMAIL_RE.is_match(email) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.starts_with('.') {
        return false;
    }

    if looks_like_dotted_quad(domain) {
        return is_dotted_quad(domain);
    }

    match domain_name::validate(domain) {
        Ok(()) => true,
        Err(reason) => {
            trace!(domain, %reason, "email domain rejected");
            false
        }
    }
}

fn looks_like_dotted_quad(domain: &str) -> bool {
    let mut digits = domain.chars().filter(|c| *c != '.').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

/// Exactly four decimal octets in `0..=255`. `010` reads as ten.
fn is_dotted_quad(domain: &str) -> bool {
    let octets: Vec<&str> = domain.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty()
                && octet.bytes().all(|b| b.is_ascii_digit())
                && octet.parse::<u8>().is_ok()
        })
}
