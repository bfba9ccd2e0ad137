//! Session command handlers.
//!
//! Sign-in and sign-up open a hub for the new session and mount it; sign-out
//! tears the hub and its session context down before revoking the token.

mod sign_in;
mod sign_out;
mod sign_up;

pub use sign_in::{SignInCommand, SignInHandler, SignInResult};
pub use sign_out::{SignOutCommand, SignOutHandler, SignOutResult};
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};

use crate::application::hub::{HubError, HubRegistry};
use crate::domain::foundation::Session;

/// Registers a hub for `session` and mounts it.
///
/// Hubs of expired sessions are swept first. A hub whose mount fails is closed again so no half-initialized entry
/// stays in the registry.
async fn open_and_mount(
    hubs: &HubRegistry,
    session: Session,
) -> Result<SignInResult, HubError> {
    let user = session.user.clone();
    let access_token = session.access_token().to_string();
    hubs.evict_expired().await;
    let hub = hubs.open(session);

    match hub.mount().await {
        Ok(pending) => Ok(SignInResult {
            user,
            access_token,
            hub,
            pending,
        }),
        Err(err) => {
            if let Some(hub) = hubs.close(&access_token) {
                hub.session().end();
            }
            Err(err)
        }
    }
}
