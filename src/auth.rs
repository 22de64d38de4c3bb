/**
 * Authentication API Surface
 *
 * Thin typed wrappers over the HTTP client core for the auth endpoints.
 */

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest};

/// Authentication operations against the LockHaven API.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post_json("/auth/login", &body).await
    }

    /// `POST /auth/register`
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post_json("/auth/register", &body).await
    }

    /// `POST /auth/logout` — best-effort server-side notification; the local
    /// session transition does not depend on it.
    pub async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        self.client.post_empty("/auth/logout").await
    }

    /// `GET /auth/profile` — bearer-authenticated.
    pub async fn get_profile(&self) -> Result<AuthResponse, ApiError> {
        self.client.get_json("/auth/profile").await
    }
}
