//! ProfileStore port for linked-profile persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{AuthError, SessionContext};
use crate::domain::hub::LinkedProfile;

/// Errors from the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileStoreError {
    /// No active session in the supplied context.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Network failure or non-success response from the table store.
    /// All remote failure kinds collapse into this one; nothing is retried.
    #[error("Remote store error: {0}")]
    Remote(String),
}

impl ProfileStoreError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }
}

/// Load/save of the signed-in user's [`LinkedProfile`].
///
/// The user is identified by the session in `ctx`; an ended context yields
/// `ProfileStoreError::Auth(AuthError::NoActiveSession)` without any remote
/// call. Implementations do no concurrency control: the last save wins and
/// callers must not overlap saves for one user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the profile, `None` if the user has never saved one.
    async fn load(&self, ctx: &SessionContext) -> Result<Option<LinkedProfile>, ProfileStoreError>;

    /// Save the full profile, creating the record on first save.
    async fn save(&self, ctx: &SessionContext, profile: &LinkedProfile)
        -> Result<(), ProfileStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_convert_transparently() {
        let err: ProfileStoreError = AuthError::NoActiveSession.into();
        assert_eq!(err.to_string(), "No active session");
    }

    #[test]
    fn remote_error_displays_message() {
        let err = ProfileStoreError::remote("503 Service Unavailable");
        assert_eq!(err.to_string(), "Remote store error: 503 Service Unavailable");
    }
}
