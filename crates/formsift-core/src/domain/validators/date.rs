//! Calendar date validation.
//!
//! Two literal layouts are accepted, `DD.MM.YYYY` and `YYYY-MM-DD`. The first
//! layout whose pattern matches decides: the string must then be a real
//! calendar date in that layout, with no fallback to the other one.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DOTTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("dotted date pattern is valid")
});

static ISO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("iso date pattern is valid")
});

/// Accepted layouts in the order they are tried, with their chrono format.
fn layouts() -> [(&'static Regex, &'static str); 2] {
    [(&*DOTTED_RE, "%d.%m.%Y"), (&*ISO_RE, "%Y-%m-%d")]
}

pub fn validate(value: Option<&str>) -> bool {
    value.is_some_and(is_valid_date)
}

/// Validate a date string. Whitespace is not trimmed.
pub fn is_valid_date(date: &str) -> bool {
    if date.is_empty() {
        return false;
    }

    layouts()
        .into_iter()
        .find(|(pattern, _)| pattern.is_match(date))
        .is_some_and(|(_, format)| NaiveDate::parse_from_str(date, format).is_ok())
}
