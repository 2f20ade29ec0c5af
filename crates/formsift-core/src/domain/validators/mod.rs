//! Field validators.
//!
//! Each validator is a pure predicate. A value that is absent, or otherwise
//! unacceptable, yields `false`; validators never return errors. The domain
//! name validator is the exception: it also explains *why* a name was
//! rejected, see [`domain_name::DomainNameError`].

pub mod date;
pub mod domain_name;
pub mod email;
pub mod phone;

/// Free text: any supplied string, including the empty one.
pub mod text {
    pub fn validate(value: Option<&str>) -> bool {
        value.is_some()
    }
}

pub use date::is_valid_date;
pub use domain_name::{DomainNameError, is_valid_domain};
pub use email::is_valid_email;
pub use phone::is_valid_phone;
