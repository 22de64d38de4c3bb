/**
 * Wire Types Module
 *
 * Request and response structures exchanged with the LockHaven API.
 * Field names are camelCase on the wire.
 */

use serde::{Deserialize, Serialize};

/// Server-reported identity of the authenticated user.
///
/// Replaced wholesale on every successful login/register/refresh, never
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Full display name.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Authentication response from server.
///
/// `token` and `user` are only meaningful when `success` is true, and even
/// then either may be missing; use [`AuthResponse::outcome`] instead of
/// reading the fields directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// What an [`AuthResponse`] actually said, with the "success but fields
/// missing" case made explicit.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Credentials accepted, both token and user present.
    Granted { token: String, user: User },
    /// Server rejected the request.
    Rejected { message: String },
    /// `success` was true but token or user was absent.
    Malformed,
}

impl AuthResponse {
    /// The reported user, honoring the success flag: a user attached to an
    /// unsuccessful response is treated as absent.
    pub fn profile_user(self) -> Option<User> {
        if self.success {
            self.user
        } else {
            None
        }
    }

    /// Collapse the boolean-plus-optional-fields shape into a tagged result.
    pub fn outcome(self) -> AuthOutcome {
        if !self.success {
            return AuthOutcome::Rejected {
                message: self.message,
            };
        }
        match (self.token, self.user) {
            (Some(token), Some(user)) => AuthOutcome::Granted { token, user },
            _ => AuthOutcome::Malformed,
        }
    }
}

/// Response to `POST /auth/logout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// One entry in the user's file list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub size: u64,
}

/// Response to `GET /files`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<FileEntry>,
}

/// Response to `POST /files/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_id: String,
}
