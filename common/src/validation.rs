//! Field-level validation shared by every entity.
//!
//! Deserialization already guarantees that required fields are present; the
//! checks here cover the value constraints serde cannot express (ranges,
//! address syntax).

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Local part made of RFC 5322 `atext` characters and dots, a domain made of
/// at least two DNS labels.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    #[error("price must be a non-negative number, got {0}")]
    NegativePrice(f64),

    #[error("value is not a valid email address: {0}")]
    InvalidEmail(String),
}

/// Implemented by every record that crosses the HTTP boundary.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn is_valid_email(value: &str) -> bool {
    value.len() <= 254 && EMAIL_RE.is_match(value)
}
