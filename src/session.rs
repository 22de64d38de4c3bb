//! Session state machine.
//!
//! Holds the in-memory authentication state for the current process lifetime
//! and orchestrates every transition: `initialize`, `login`, `register`,
//! `logout`, `refresh`, and `clear_error`. The durable token slot is written
//! only from here; the HTTP client core reads it on every call.
//!
//! # States
//!
//! `Uninitialized → Loading → {Authenticated, Anonymous}`, with
//! `Authenticated ⇄ Anonymous` via logout/login/register and
//! `Authenticated → Anonymous` via a failed refresh.
//!
//! # Error policy
//!
//! `login` and `register` record the error for display and re-raise it so
//! the calling form can branch. `initialize` and `refresh` absorb failures
//! into a silent transition to the logged-out state.
//!
//! # Concurrency
//!
//! Mutating operations take `&mut self`, so at most one is in flight per
//! session; a second concurrent login cannot interleave with the first.

use std::sync::Arc;

use tracing::debug;

use crate::auth::AuthApi;
use crate::error::ApiError;
use crate::policy::{AuthPolicy, Navigator};
use crate::token::TokenStore;
use crate::types::{AuthOutcome, AuthResponse, User};

/// In-memory authentication state plus its transition operations.
///
/// This is the entire contract page components depend on: `user`,
/// `is_authenticated`, `is_loading`, `error`, and the transitions.
pub struct Session {
    api: AuthApi,
    store: Arc<dyn TokenStore>,
    policy: AuthPolicy,
    user: Option<User>,
    token: Option<String>,
    is_loading: bool,
    error: Option<String>,
}

impl Session {
    /// Create a session in the loading state. Call
    /// [`initialize`](Self::initialize) next to rehydrate from the stored
    /// token.
    pub fn new(api: AuthApi, navigator: Arc<dyn Navigator>) -> Self {
        let store = api.client().store();
        let policy = AuthPolicy::new(Arc::clone(&store), navigator);
        Self {
            api,
            store,
            policy,
            user: None,
            token: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True iff both a user and a token are held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rehydrate the session from the persisted token, once at process
    /// start.
    ///
    /// A missing token, a failed profile call, or a malformed response all
    /// land in the anonymous state without a user-visible error; an invalid
    /// stored token is deleted along the way.
    pub async fn initialize(&mut self) {
        let Some(token) = self.store.load() else {
            self.is_loading = false;
            return;
        };
        let result = self.policy.check(self.api.get_profile().await);
        match result.map(AuthResponse::profile_user) {
            Ok(Some(user)) => {
                debug!(user = %user.email, "session rehydrated from stored token");
                self.user = Some(user);
                self.token = Some(token);
            }
            Ok(None) | Err(_) => {
                // Stored token is no longer valid; recover silently.
                self.store.clear();
                self.user = None;
                self.token = None;
            }
        }
        self.is_loading = false;
    }

    /// Authenticate with email and password.
    ///
    /// On success the token is persisted and the session becomes
    /// authenticated. On any failure the error is recorded for display and
    /// re-raised to the caller.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        self.is_loading = true;
        self.error = None;
        let result = self.policy.check(self.api.login(email, password).await);
        self.finish_authentication(result)
    }

    /// Create an account and authenticate. Same contract and error policy as
    /// [`login`](Self::login).
    pub async fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.is_loading = true;
        self.error = None;
        let result = self
            .policy
            .check(self.api.register(first_name, last_name, email, password).await);
        self.finish_authentication(result)
    }

    /// Log out locally: clear the stored token and reset to anonymous.
    ///
    /// Unconditional and idempotent; no server round-trip is required.
    /// Consumers wanting best-effort server notification call
    /// [`AuthApi::logout`] separately.
    pub fn logout(&mut self) {
        debug!("session logged out");
        self.store.clear();
        self.user = None;
        self.token = None;
        self.is_loading = false;
        self.error = None;
    }

    /// Re-fetch the profile, replacing the user in place.
    ///
    /// Any failure is treated as session expiry and cascades into
    /// [`logout`](Self::logout); no error is surfaced.
    pub async fn refresh(&mut self) {
        let result = self.policy.check(self.api.get_profile().await);
        match result.map(AuthResponse::profile_user) {
            Ok(Some(user)) => self.user = Some(user),
            Ok(None) | Err(_) => self.logout(),
        }
    }

    /// Clear the displayed error. No other state changes.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Apply a login/register response, holding the token-iff-user
    /// invariant.
    fn finish_authentication(
        &mut self,
        result: Result<AuthResponse, ApiError>,
    ) -> Result<(), ApiError> {
        self.is_loading = false;
        match result.map(AuthResponse::outcome) {
            Ok(AuthOutcome::Granted { token, user }) => {
                self.store.save(&token);
                self.token = Some(token);
                self.user = Some(user);
                self.error = None;
                Ok(())
            }
            Ok(AuthOutcome::Rejected { message }) => {
                // 2xx with success=false: the server broke its own contract,
                // but its message is still the most useful thing to show.
                self.fail(ApiError::MalformedResponse(message))
            }
            Ok(AuthOutcome::Malformed) => {
                self.fail(ApiError::MalformedResponse("missing token or user".to_string()))
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: ApiError) -> Result<(), ApiError> {
        self.user = None;
        self.token = None;
        self.error = Some(err.to_string());
        Err(err)
    }
}
