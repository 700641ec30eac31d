//! Per-field validation rules for the profile form.
//!
//! Rules for a field run in a fixed order and stop at the first failure, so a
//! field reports at most one error. Validation is pure: the same key and value
//! always produce the same result.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::field::FieldKey;
use crate::{MIN_ADDRESS_LEN, MIN_NAME_LEN, MIN_PASSWORD_LEN, MIN_PHONE_DIGITS};

// Whitespace as browsers define it for `trim()` and regex `\s`: Unicode
// White_Space minus U+0085, plus the byte order mark U+FEFF.
const WS: &str = r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^[A-Za-z{WS}]+$")).expect("valid letters regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[^{WS}@]+@[^{WS}@]+\.[^{WS}@]+$")).expect("valid email regex")
});

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^[0-9{WS}+()-]+$")).expect("valid phone regex"));

/// A failed validation rule. `Display` is the message shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Must be at least 2 characters")]
    NameTooShort,
    #[error("Only letters are allowed")]
    LettersOnly,

    #[error("City is required")]
    CityRequired,

    #[error("Postal code is required")]
    PostalCodeRequired,

    #[error("Address is required")]
    AddressRequired,
    #[error("Address must be at least 5 characters")]
    AddressTooShort,

    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Phone is required")]
    PhoneRequired,
    #[error("Invalid phone format")]
    InvalidPhone,
    #[error("Phone must be at least 10 digits")]
    PhoneTooShort,

    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn trim(value: &str) -> &str {
    value.trim_matches(is_space)
}

fn is_blank(value: &str) -> bool {
    trim(value).is_empty()
}

/// Length in UTF-16 code units, the unit browser inputs report.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn validate_name(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::Required);
    }
    if text_len(trim(value)) < MIN_NAME_LEN {
        return Err(FieldError::NameTooShort);
    }
    if !LETTERS_RE.is_match(value) {
        return Err(FieldError::LettersOnly);
    }
    Ok(())
}

fn validate_city(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::CityRequired);
    }
    if !LETTERS_RE.is_match(value) {
        return Err(FieldError::LettersOnly);
    }
    Ok(())
}

fn validate_address(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::AddressRequired);
    }
    if text_len(trim(value)) < MIN_ADDRESS_LEN {
        return Err(FieldError::AddressTooShort);
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::PhoneRequired);
    }
    if !PHONE_RE.is_match(value) {
        return Err(FieldError::InvalidPhone);
    }
    if value.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        return Err(FieldError::PhoneTooShort);
    }
    Ok(())
}

fn validate_password(value: &str) -> Result<(), FieldError> {
    // Whitespace counts for passwords.
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if text_len(value) < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

/// Run the rules for `key` against `value`.
///
/// # Errors
///
/// Returns the first rule that `value` breaks.
pub fn validate_field(key: FieldKey, value: &str) -> Result<(), FieldError> {
    match key {
        FieldKey::FirstName | FieldKey::LastName => validate_name(value),
        FieldKey::City => validate_city(value),
        FieldKey::PostalCode => {
            if is_blank(value) {
                Err(FieldError::PostalCodeRequired)
            } else {
                Ok(())
            }
        }
        FieldKey::Address => validate_address(value),
        FieldKey::Email => validate_email(value),
        FieldKey::Phone => validate_phone(value),
        FieldKey::Password => validate_password(value),
    }
}

/// String form of [`validate_field`]: the error message, or `""` when valid.
#[must_use]
pub fn error_message(key: FieldKey, value: &str) -> String {
    validate_field(key, value)
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default()
}
