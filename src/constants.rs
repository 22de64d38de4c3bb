//! Fixed names and user-facing message strings.
//!
//! These are shared between the validation helpers and the session layer so
//! the UI renders consistent wording everywhere.

/// Key under which the bearer token is persisted in durable client storage.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Path the 401 policy navigates to when authentication is required.
pub const LOGIN_PATH: &str = "/login";

/// Special characters accepted (and one required) in passwords.
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

// User-facing error messages
pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all fields";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_WEAK_PASSWORD: &str = "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character";
pub const MSG_PASSWORDS_DONT_MATCH: &str = "Passwords do not match";
