//! Field-level form validation.
//!
//! Pure functions, checked before any network call. A failed validation never
//! reaches the HTTP layer; the UI renders the message inline.

use thiserror::Error;

use crate::constants::{
    MSG_INVALID_EMAIL, MSG_PASSWORDS_DONT_MATCH, MSG_REQUIRED_FIELDS, MSG_WEAK_PASSWORD,
    PASSWORD_MIN_LEN, PASSWORD_SPECIAL_CHARS,
};

/// A field value that failed validation, with the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check that an email is present and plausibly shaped.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new(MSG_REQUIRED_FIELDS));
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::new(MSG_INVALID_EMAIL));
    }
    Ok(())
}

/// Check password strength: at least 8 characters with one lowercase letter,
/// one uppercase letter, one digit, and one special character from
/// `@$!%*?&` — and nothing outside that alphabet.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new(MSG_REQUIRED_FIELDS));
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c));

    if password.len() < PASSWORD_MIN_LEN
        || !has_lower
        || !has_upper
        || !has_digit
        || !has_special
        || !allowed
    {
        return Err(ValidationError::new(MSG_WEAK_PASSWORD));
    }
    Ok(())
}

/// Check that the confirmation field matches the chosen password.
pub fn validate_password_confirmation(
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.is_empty() {
        return Err(ValidationError::new(MSG_REQUIRED_FIELDS));
    }
    if password != confirm_password {
        return Err(ValidationError::new(MSG_PASSWORDS_DONT_MATCH));
    }
    Ok(())
}

/// Check that a single named field is non-blank.
pub fn validate_required(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "Please enter your {}",
            field_name
        )));
    }
    Ok(())
}

/// Check that every field in a form has a non-blank value.
pub fn validate_form_data<'a, I>(fields: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (_name, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::new(MSG_REQUIRED_FIELDS));
        }
    }
    Ok(())
}
