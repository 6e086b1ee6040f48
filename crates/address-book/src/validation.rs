//! Input validation for address form fields.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty value where one is required.
    Empty(String),
    /// Phone number is not a 10-digit local number.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
            ValidationError::InvalidPhone(msg) => write!(f, "Invalid phone number: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Country prefix the phone field always carries.
pub const PHONE_PREFIX: &str = "+91 ";

/// Number of digits in a local phone number.
pub const PHONE_DIGITS: usize = 10;

/// Require a non-blank value.
pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field.to_string()));
    }
    Ok(())
}

/// Validate a prefixed phone number and return its local digits.
///
/// The fixed `"+91 "` prefix is stripped first; what remains must be exactly
/// ten ASCII digits.
pub fn validate_phone(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    let local = value.strip_prefix(PHONE_PREFIX).unwrap_or(value);

    let len = local.chars().count();
    if len != PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone(format!(
            "expected {} digits, got {} characters",
            PHONE_DIGITS, len
        )));
    }

    if let Some(c) = local.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone(format!(
            "invalid character '{}'",
            c
        )));
    }

    Ok(local.to_string())
}

/// Local part of a phone number with any `+91` country code removed.
pub fn local_phone_part(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix("+91")
        .map(str::trim_start)
        .unwrap_or(value)
}
