//! Mock authentication adapter for testing.
//!
//! Implements the `AuthProvider` port in memory, avoiding the need for the
//! hosted auth service.
//!
//! # Example
//!
//! ```ignore
//! use progress_hub::adapters::auth::MockAuthProvider;
//!
//! let provider = MockAuthProvider::new().with_account("me@example.com", "secret", "user-1");
//!
//! let session = provider.sign_in("me@example.com", "secret").await?;
//! assert_eq!(session.user.id.as_str(), "user-1");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Session, UserId};
use crate::ports::{AuthProvider, SignUpOutcome};

#[derive(Debug, Clone)]
struct Account {
    password: String,
    user: AuthenticatedUser,
}

/// In-memory auth provider.
///
/// Issues tokens of the form `mock-token-{n}`. Signing out revokes a token;
/// revoked or unknown tokens yield `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockAuthProvider {
    /// Accounts keyed by email
    accounts: RwLock<HashMap<String, Account>>,
    /// Tokens issued and not yet revoked
    live_tokens: RwLock<HashSet<String>>,
    /// Whether sign-up waits for email confirmation
    require_confirmation: bool,
    /// Optional error to return for every call (for error testing)
    force_error: RwLock<Option<AuthError>>,
    /// Lifetime in seconds stamped on issued sessions
    session_ttl: Option<u64>,
    issued: AtomicU64,
}

impl MockAuthProvider {
    /// Creates a new provider with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account.
    pub fn with_account(
        self,
        email: impl Into<String>,
        password: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        self.add_account(email, password, user_id);
        self
    }

    /// Makes sign-up return `ConfirmationPending` instead of a session.
    pub fn with_confirmation_required(mut self) -> Self {
        self.require_confirmation = true;
        self
    }

    /// Issues sessions that expire `secs` seconds after sign-in.
    pub fn with_session_ttl(mut self, secs: u64) -> Self {
        self.session_ttl = Some(secs);
        self
    }

    /// Forces every call to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Clears the forced error.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Adds an account at runtime.
    pub fn add_account(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
        user_id: impl Into<String>,
    ) {
        let email = email.into();
        let Ok(id) = UserId::new(user_id) else {
            return;
        };
        let account = Account {
            password: password.into(),
            user: AuthenticatedUser::new(id, email.clone()),
        };
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(email, account);
    }

    /// Returns true if the token was issued and not revoked.
    pub fn is_live(&self, token: &str) -> bool {
        self.live_tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(token)
    }

    /// Returns the number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn check_forced(&self) -> Result<(), AuthError> {
        match self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn issue(&self, user: AuthenticatedUser) -> Session {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("mock-token-{}", n);
        self.live_tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone());
        let session = Session::new(user, token);
        match self.session_ttl {
            Some(secs) => session.expiring_in(secs),
            None => session,
        }
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.check_forced()?;

        let user = self
            .accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .filter(|account| account.password == password)
            .map(|account| account.user.clone())
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(self.issue(user))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        self.check_forced()?;

        let exists = self
            .accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(email);
        if email.is_empty() || password.is_empty() || exists {
            return Err(AuthError::InvalidCredentials);
        }

        let user_id = format!("user-{}", self.account_count() + 1);
        self.add_account(email, password, user_id);

        if self.require_confirmation {
            return Ok(SignUpOutcome::ConfirmationPending);
        }
        let session = self.sign_in(email, password).await?;
        Ok(SignUpOutcome::SignedIn(session))
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        self.check_forced()?;

        if self
            .live_tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session.access_token())
        {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
