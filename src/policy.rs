//! 401 reaction policy.
//!
//! The HTTP client core only reports `AuthenticationRequired`; this layer
//! decides what that means for the client as a whole: drop the persisted
//! token and send the user back to the login entry point. Keeping the
//! reaction out of the core lets the core be tested without a navigation
//! environment.

use std::sync::Arc;

use tracing::info;

use crate::constants::LOGIN_PATH;
use crate::error::ApiError;
use crate::token::TokenStore;

/// Client-side navigation hook. Implemented by the host application shell.
pub trait Navigator: Send + Sync {
    /// Navigate the UI to `path`.
    fn redirect(&self, path: &str);
}

/// Navigator for embedders without a navigation surface (and for tests that
/// do not assert on redirects).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect(&self, _path: &str) {}
}

/// Applies the authentication-required reaction to API call outcomes.
#[derive(Clone)]
pub struct AuthPolicy {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthPolicy {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Pass an API call result through the policy.
    ///
    /// On `AuthenticationRequired` the stored token is deleted and the
    /// navigator is pointed at the login page, regardless of which endpoint
    /// failed. The error itself is returned unchanged; there is no retry.
    pub fn check<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::AuthenticationRequired) = &result {
            info!("authentication required, clearing token and redirecting");
            self.store.clear();
            self.navigator.redirect(LOGIN_PATH);
        }
        result
    }
}
