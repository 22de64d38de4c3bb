//! LockHaven Client - Main Library
//!
//! Client-side core for the LockHaven secure file vault: an authenticated
//! HTTP API client, a session state machine, and field-level form
//! validation. Page components render on top of this crate; everything they
//! are allowed to depend on is exported from here.
//!
//! # Module Structure
//!
//! - **`config`** - Environment-sourced configuration (API base URL,
//!   deployment environment, request timeout)
//! - **`client`** - The HTTP client core: bearer-token injection, JSON
//!   semantics, centralized status handling
//! - **`auth`** / **`files`** - Typed API surfaces over the client core
//! - **`session`** - The auth state machine (initialize, login, register,
//!   logout, refresh)
//! - **`policy`** - What a 401 means for the client: token cleared,
//!   navigation to login
//! - **`token`** - Durable bearer-token storage
//! - **`validation`** - Pure form-field validation helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lockhaven_client::{ApiClient, AuthApi, Config, FileTokenStore, NoopNavigator, Session};
//!
//! # async fn example() -> Result<(), lockhaven_client::ApiError> {
//! let config = Config::from_env();
//! let store = Arc::new(FileTokenStore::new());
//! let client = ApiClient::new(config, store)?;
//!
//! let mut session = Session::new(AuthApi::new(client), Arc::new(NoopNavigator));
//! session.initialize().await;
//! if !session.is_authenticated() {
//!     session.login("ada@example.com", "Secure1!").await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Network and server failures are [`ApiError`]; form-field failures are
//! [`ValidationError`] and never reach the HTTP layer. The client core never
//! retries; it logs and returns the typed error.

/// Client configuration
pub mod config;

/// HTTP client core
pub mod client;

/// Authentication API surface
pub mod auth;

/// File API surface
pub mod files;

/// Session state machine
pub mod session;

/// 401 reaction policy
pub mod policy;

/// Durable token storage
pub mod token;

/// Form field validation
pub mod validation;

/// Wire types
pub mod types;

/// Error types
pub mod error;

/// Fixed names and messages
pub mod constants;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use config::{Config, ConfigBuilder, ConfigError, Environment};
pub use error::ApiError;
pub use files::FileApi;
pub use policy::{AuthPolicy, Navigator, NoopNavigator};
pub use session::Session;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::{
    AuthOutcome, AuthResponse, FileEntry, FileListResponse, LoginRequest, LogoutResponse,
    RegisterRequest, UploadResponse, User,
};
pub use validation::{
    validate_email, validate_form_data, validate_password, validate_password_confirmation,
    validate_required, ValidationError,
};
