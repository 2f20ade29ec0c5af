//! Phone number validation: `+7 DDD DDD DD DD` and nothing else.

use std::sync::LazyLock;

use regex::Regex;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+7 [0-9]{3} [0-9]{3} [0-9]{2} [0-9]{2}$").expect("phone pattern is a valid regex")
});

pub fn validate(value: Option<&str>) -> bool {
    value.is_some_and(is_valid_phone)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
