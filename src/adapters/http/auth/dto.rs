//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

use crate::application::SignInResult;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Email/password pair for sign-in and sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Signed-in user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

/// Response for a successful sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub user: UserResponse,
}

impl From<&SignInResult> for SessionResponse {
    fn from(result: &SignInResult) -> Self {
        Self {
            access_token: result.access_token.clone(),
            user: UserResponse {
                id: result.user.id.to_string(),
                email: result.user.email.clone(),
            },
        }
    }
}

/// Response for sign-up, tagged by outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SignUpResponse {
    SignedIn(SessionResponse),
    ConfirmationPending { message: String },
}

/// Response for sign-out.
#[derive(Debug, Clone, Serialize)]
pub struct SignOutResponse {
    pub revoked: bool,
}
