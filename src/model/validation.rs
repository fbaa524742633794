use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for form fields.
///
/// Only the password is checked; username and email are accepted as typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "Password must contain at least 1 uppercase, 1 lowercase, 1 number, \
         1 special character (@$!%*?&) and be at least 8 characters long"
    )]
    InvalidPassword,
}

/// Symbols a password may (and must, at least once) contain.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

static PASSWORD_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").expect("valid hardcoded regex"));

static LOWERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]").expect("valid hardcoded regex"));

static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("valid hardcoded regex"));

static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("valid hardcoded regex"));

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@$!%*?&]").expect("valid hardcoded regex"));

/// Validates a password against the signup rule.
///
/// The whole string must be drawn from `[A-Za-z0-9@$!%*?&]`, be at least
/// [`MIN_PASSWORD_LEN`] characters long, and contain at least one lowercase
/// letter, one uppercase letter, one digit and one of [`PASSWORD_SYMBOLS`].
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let valid = PASSWORD_CHARSET_RE.is_match(password)
        && LOWERCASE_RE.is_match(password)
        && UPPERCASE_RE.is_match(password)
        && DIGIT_RE.is_match(password)
        && SYMBOL_RE.is_match(password);
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidPassword)
    }
}
