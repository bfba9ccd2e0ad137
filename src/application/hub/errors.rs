//! Hub operation errors.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};
use crate::ports::ProfileStoreError;

/// Errors returned by [`ProfessionalHub`](super::ProfessionalHub) operations.
///
/// Source failures never show up here: they become per-section display
/// state. Only profile persistence, session and edit-mode problems do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Profile is not in edit mode")]
    NotEditing,

    #[error("A save is already in progress")]
    SaveInProgress,
}

impl From<ProfileStoreError> for HubError {
    fn from(err: ProfileStoreError) -> Self {
        match err {
            ProfileStoreError::Auth(auth) => HubError::Auth(auth),
            ProfileStoreError::Remote(message) => HubError::Remote(message),
        }
    }
}

impl From<HubError> for DomainError {
    fn from(err: HubError) -> Self {
        let code = match &err {
            HubError::Auth(auth) if auth.requires_reauthentication() => ErrorCode::Unauthorized,
            HubError::Auth(AuthError::InvalidCredentials) => ErrorCode::InvalidCredentials,
            HubError::Auth(_) => ErrorCode::RemoteError,
            HubError::Remote(_) => ErrorCode::RemoteError,
            HubError::NotEditing => ErrorCode::NotEditing,
            HubError::SaveInProgress => ErrorCode::SaveInProgress,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_keep_their_kind() {
        let auth: HubError = ProfileStoreError::Auth(AuthError::NoActiveSession).into();
        assert_eq!(auth, HubError::Auth(AuthError::NoActiveSession));

        let remote: HubError = ProfileStoreError::remote("500").into();
        assert_eq!(remote, HubError::Remote("500".to_string()));
    }

    #[test]
    fn maps_to_domain_error_codes() {
        let cases = [
            (HubError::Auth(AuthError::NoActiveSession), ErrorCode::Unauthorized),
            (HubError::Auth(AuthError::InvalidToken), ErrorCode::Unauthorized),
            (HubError::Auth(AuthError::InvalidCredentials), ErrorCode::InvalidCredentials),
            (
                HubError::Auth(AuthError::service_unavailable("down")),
                ErrorCode::RemoteError,
            ),
            (HubError::Remote("x".into()), ErrorCode::RemoteError),
            (HubError::NotEditing, ErrorCode::NotEditing),
            (HubError::SaveInProgress, ErrorCode::SaveInProgress),
        ];
        for (err, code) in cases {
            assert_eq!(DomainError::from(err).code, code);
        }
    }
}
