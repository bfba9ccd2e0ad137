//! Authentication types for the domain layer.
//!
//! These types represent a signed-in user and the session the hosted auth
//! service issued for them. They have **no external dependencies** - any auth
//! backend can populate them via the `AuthProvider` port.
//!
//! # Session lifecycle
//!
//! A [`SessionContext`] is created once per signed-in client and handed
//! explicitly to everything that needs the caller's identity. It starts
//! active, and [`SessionContext::end`] tears it down on sign-out. Code holding
//! an ended context gets [`AuthError::NoActiveSession`] from
//! [`SessionContext::current`].

use std::sync::{PoisonError, RwLock};

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use super::{Timestamp, UserId};

/// Authenticated user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth service.
    pub id: UserId,

    /// User's email address.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// A session issued by the auth service.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: AuthenticatedUser,
    access_token: Secret<String>,
    pub signed_in_at: Timestamp,
    /// When the access token stops being accepted; `None` if never reported.
    pub expires_at: Option<Timestamp>,
}

impl Session {
    pub fn new(user: AuthenticatedUser, access_token: impl Into<String>) -> Self {
        Self {
            user,
            access_token: Secret::new(access_token.into()),
            signed_in_at: Timestamp::now(),
            expires_at: None,
        }
    }

    /// Sets the expiry to `expires_in` seconds after sign-in.
    pub fn expiring_in(mut self, expires_in: u64) -> Self {
        self.expires_at = Some(self.signed_in_at.plus_secs(expires_in));
        self
    }

    /// Returns true once `now` has reached the expiry.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expiry| !expiry.is_after(&now))
    }

    /// Exposes the bearer token (for making requests).
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

/// Authentication errors.
///
/// These errors are **domain-centric** - they describe what went wrong
/// from the application's perspective, not the auth backend's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No session is active; the client must sign in again.
    #[error("No active session")]
    NoActiveSession,

    /// Email/password pair rejected by the auth service.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// The access token is unknown, malformed or revoked.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::NoActiveSession | AuthError::InvalidToken)
    }
}

/// Explicitly passed session context with a defined lifecycle.
#[derive(Debug)]
pub struct SessionContext {
    session: RwLock<Option<Session>>,
}

impl SessionContext {
    /// Starts a context for a freshly issued session.
    pub fn start(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    /// Returns the active session, or `NoActiveSession` once ended.
    pub fn current(&self) -> Result<Session, AuthError> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(AuthError::NoActiveSession)
    }

    pub fn is_active(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Tears the session down. Returns the session that was active, if any.
    pub fn end(&self) -> Option<Session> {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
