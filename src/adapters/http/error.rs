//! Error responses shared by all HTTP modules.
//!
//! Every layer-specific error is collapsed into a [`DomainError`] and
//! rendered as `{ code, message, details? }` with a matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = (!error.details.is_empty())
            .then(|| serde_json::json!(error.details));
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::UnknownField => StatusCode::BAD_REQUEST,
        ErrorCode::NotEditing | ErrorCode::SaveInProgress => StatusCode::CONFLICT,
        ErrorCode::Unauthorized | ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ErrorCode::RemoteError | ErrorCode::FetchError => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a domain error with its mapped status.
pub fn error_response(error: impl Into<DomainError>) -> Response {
    let error = error.into();
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::warn!(code = %error.code, "Request failed: {}", error.message);
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_statuses() {
        let cases = [
            (ErrorCode::UnknownField, StatusCode::BAD_REQUEST),
            (ErrorCode::NotEditing, StatusCode::CONFLICT),
            (ErrorCode::SaveInProgress, StatusCode::CONFLICT),
            (ErrorCode::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ErrorCode::RemoteError, StatusCode::BAD_GATEWAY),
            (ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            let response = error_response(DomainError::new(code, "x"));
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn session_errors_ask_for_sign_in_again() {
        use crate::application::HubError;
        use crate::domain::foundation::AuthError;

        let ended = error_response(HubError::Auth(AuthError::NoActiveSession));
        assert_eq!(ended.status(), StatusCode::UNAUTHORIZED);

        let revoked = error_response(HubError::Auth(AuthError::InvalidToken));
        assert_eq!(revoked.status(), StatusCode::UNAUTHORIZED);

        let outage = error_response(HubError::Auth(AuthError::service_unavailable("down")));
        assert_eq!(outage.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn details_are_omitted_when_empty() {
        let plain = ErrorResponse::from(&DomainError::new(ErrorCode::NotEditing, "x"));
        assert!(plain.details.is_none());

        let detailed =
            ErrorResponse::from(&DomainError::validation("field", "unknown profile field"));
        assert_eq!(detailed.code, "VALIDATION_FAILED");
        assert_eq!(detailed.details.unwrap()["field"], "field");
    }
}
