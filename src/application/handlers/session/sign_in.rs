//! SignInHandler - Command handler for email/password sign-in.

use std::sync::Arc;

use crate::application::hub::{HubError, HubRegistry, ProfessionalHub};
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::hub::FetchTicket;
use crate::ports::AuthProvider;

use super::open_and_mount;

/// Command to sign in with email and password.
#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful sign-in.
///
/// The hub is mounted; `pending` holds the section fetches the caller still
/// has to run (see [`ProfessionalHub::run_all`]).
pub struct SignInResult {
    pub user: AuthenticatedUser,
    pub access_token: String,
    pub hub: Arc<ProfessionalHub>,
    pub pending: Vec<FetchTicket>,
}

impl std::fmt::Debug for SignInResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInResult")
            .field("user", &self.user)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

/// Handler for signing in.
pub struct SignInHandler {
    auth: Arc<dyn AuthProvider>,
    hubs: Arc<HubRegistry>,
}

impl SignInHandler {
    pub fn new(auth: Arc<dyn AuthProvider>, hubs: Arc<HubRegistry>) -> Self {
        Self { auth, hubs }
    }

    pub async fn handle(&self, cmd: SignInCommand) -> Result<SignInResult, HubError> {
        // 1. Exchange credentials for a session
        let session = self.auth.sign_in(&cmd.email, &cmd.password).await?;
        tracing::info!(user_id = %session.user.id, "User signed in");

        // 2. Open and mount a hub bound to that session
        open_and_mount(&self.hubs, session).await
    }
}
