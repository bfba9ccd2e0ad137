//! SignUpHandler - Command handler for account registration.

use std::sync::Arc;

use crate::application::hub::{HubError, HubRegistry};
use crate::ports::{AuthProvider, SignUpOutcome};

use super::{open_and_mount, SignInResult};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful sign-up.
#[derive(Debug)]
pub enum SignUpResult {
    /// The auth service issued a session right away; the hub is mounted.
    SignedIn(SignInResult),
    /// The account exists but must be confirmed before signing in.
    ConfirmationPending,
}

/// Handler for registering accounts.
pub struct SignUpHandler {
    auth: Arc<dyn AuthProvider>,
    hubs: Arc<HubRegistry>,
}

impl SignUpHandler {
    pub fn new(auth: Arc<dyn AuthProvider>, hubs: Arc<HubRegistry>) -> Self {
        Self { auth, hubs }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, HubError> {
        match self.auth.sign_up(&cmd.email, &cmd.password).await? {
            SignUpOutcome::SignedIn(session) => {
                tracing::info!(user_id = %session.user.id, "User signed up");
                let result = open_and_mount(&self.hubs, session).await?;
                Ok(SignUpResult::SignedIn(result))
            }
            SignUpOutcome::ConfirmationPending => {
                tracing::info!(email = %cmd.email, "Sign-up awaiting confirmation");
                Ok(SignUpResult::ConfirmationPending)
            }
        }
    }
}
