//! Auth provider port for the hosted auth service.
//!
//! Sign-in produces a [`Session`] which the caller wraps in a
//! `SessionContext` and passes explicitly to whatever needs the caller's
//! identity. Sign-out revokes the token remotely; tearing the local context
//! down is the caller's job.
//!
//! # Example
//!
//! ```ignore
//! let session = auth_provider.sign_in("me@example.com", "secret").await?;
//! let ctx = Arc::new(SessionContext::start(session));
//! // ...
//! if let Some(session) = ctx.end() {
//!     auth_provider.sign_out(&session).await?;
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Session};

/// Result of a sign-up request.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// The account was created and a session issued right away.
    SignedIn(Session),
    /// The account was created but must be confirmed (e.g. by email)
    /// before signing in.
    ConfirmationPending,
}

/// Email/password authentication against the hosted auth service.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidCredentials` when the service rejects the pair
/// - Return `AuthError::InvalidToken` when signing out an unknown token
/// - Return `AuthError::ServiceUnavailable` for network and server errors
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange email and password for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account.
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError>;

    /// Revoke the session's token.
    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}
