//! SignOutHandler - Command handler for ending a session.

use std::sync::Arc;

use crate::application::hub::{HubError, HubRegistry};
use crate::domain::foundation::AuthError;
use crate::ports::AuthProvider;

/// Command to sign out the session identified by its access token.
#[derive(Debug, Clone)]
pub struct SignOutCommand {
    pub access_token: String,
}

/// Result of a sign-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOutResult {
    /// Whether the auth service confirmed the token revocation.
    pub revoked: bool,
}

/// Handler for signing out.
///
/// Local teardown always happens: the hub leaves the registry, its derived
/// state is discarded and the session context ends. Remote revocation runs
/// last and its failure is reported in the result, not as an error.
pub struct SignOutHandler {
    auth: Arc<dyn AuthProvider>,
    hubs: Arc<HubRegistry>,
}

impl SignOutHandler {
    pub fn new(auth: Arc<dyn AuthProvider>, hubs: Arc<HubRegistry>) -> Self {
        Self { auth, hubs }
    }

    pub async fn handle(&self, cmd: SignOutCommand) -> Result<SignOutResult, HubError> {
        // 1. Detach the hub
        let hub = self
            .hubs
            .close(&cmd.access_token)
            .ok_or(AuthError::NoActiveSession)?;

        // 2. Tear down local state
        hub.unmount().await;
        let session = hub.session().end().ok_or(AuthError::NoActiveSession)?;

        // 3. Revoke remotely
        let revoked = match self.auth.sign_out(&session).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(user_id = %session.user.id, "Token revocation failed: {}", err);
                false
            }
        };

        tracing::info!(user_id = %session.user.id, revoked, "User signed out");
        Ok(SignOutResult { revoked })
    }
}
