//! GoTrue adapter for the hosted auth service.
//!
//! Implements the `AuthProvider` port against the backend's `/auth/v1` API:
//!
//! - `POST /token?grant_type=password` - email/password sign-in
//! - `POST /signup` - registration (session or pending confirmation)
//! - `POST /logout` - token revocation
//!
//! Every request carries the project's anon key in the `apikey` header.

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Session, UserId};
use crate::ports::{AuthProvider, SignUpOutcome};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Session payload from the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Token lifetime in seconds.
    #[serde(default)]
    expires_in: Option<u64>,
    user: GoTrueUser,
}

/// Sign-up answers with a full session when confirmation is off, or with a
/// bare user object when it is on.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    user: Option<GoTrueUser>,
}

/// GoTrue-backed auth provider.
pub struct GoTrueAuthProvider {
    auth_url: String,
    anon_key: Secret<String>,
    http_client: reqwest::Client,
}

impl GoTrueAuthProvider {
    pub fn new(config: &BackendConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            auth_url: config.auth_url(),
            anon_key: config.anon_key.clone(),
            http_client,
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http_client
            .post(format!("{}{}", self.auth_url, path))
            .header("apikey", self.anon_key.expose_secret())
    }

    fn to_session(
        &self,
        access_token: String,
        expires_in: Option<u64>,
        user: GoTrueUser,
    ) -> Result<Session, AuthError> {
        let id = UserId::new(user.id).map_err(|_| {
            tracing::error!("Auth service returned a user without id");
            AuthError::service_unavailable("Auth service returned a user without id")
        })?;
        let user = AuthenticatedUser::new(id, user.email.unwrap_or_default());
        let session = Session::new(user, access_token);
        Ok(match expires_in {
            Some(secs) => session.expiring_in(secs),
            None => session,
        })
    }
}

fn unavailable(context: &str, err: reqwest::Error) -> AuthError {
    tracing::error!("{}: {}", context, err);
    AuthError::service_unavailable(format!("{}: {}", context, err))
}

#[async_trait]
impl AuthProvider for GoTrueAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tracing::debug!(%email, "Signing in");

        let response = self
            .post("/token?grant_type=password")
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| unavailable("Sign-in request failed", e))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%email, "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            tracing::error!("Auth service returned {}", status);
            return Err(AuthError::service_unavailable(format!(
                "Auth service returned {}",
                status
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| unavailable("Failed to parse sign-in response", e))?;

        self.to_session(body.access_token, body.expires_in, body.user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        tracing::debug!(%email, "Signing up");

        let response = self
            .post("/signup")
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| unavailable("Sign-up request failed", e))?;

        let status = response.status();
        if status.is_client_error() {
            tracing::warn!(%email, %status, "Sign-up rejected");
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            tracing::error!("Auth service returned {}", status);
            return Err(AuthError::service_unavailable(format!(
                "Auth service returned {}",
                status
            )));
        }

        let body: SignUpResponse = response
            .json()
            .await
            .map_err(|e| unavailable("Failed to parse sign-up response", e))?;

        match (body.access_token, body.user) {
            (Some(token), Some(user)) => Ok(SignUpOutcome::SignedIn(
                self.to_session(token, body.expires_in, user)?,
            )),
            _ => Ok(SignUpOutcome::ConfirmationPending),
        }
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        tracing::debug!(user_id = %session.user.id, "Signing out");

        let response = self
            .post("/logout")
            .bearer_auth(session.access_token())
            .send()
            .await
            .map_err(|e| unavailable("Sign-out request failed", e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidToken);
        }
        if !status.is_success() {
            tracing::error!("Auth service returned {}", status);
            return Err(AuthError::service_unavailable(format!(
                "Auth service returned {}",
                status
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for GoTrueAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoTrueAuthProvider")
            .field("auth_url", &self.auth_url)
            .finish_non_exhaustive()
    }
}
