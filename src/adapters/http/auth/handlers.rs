//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireHub;
use crate::adapters::http::spawn_fetches;
use crate::application::{
    SignInCommand, SignInHandler, SignOutCommand, SignOutHandler, SignUpCommand, SignUpHandler,
    SignUpResult,
};

use super::dto::{CredentialsRequest, SessionResponse, SignOutResponse, SignUpResponse};

const CONFIRMATION_PENDING: &str = "Check your email to confirm your account.";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    sign_in_handler: Arc<SignInHandler>,
    sign_up_handler: Arc<SignUpHandler>,
    sign_out_handler: Arc<SignOutHandler>,
}

impl AuthHandlers {
    pub fn new(
        sign_in_handler: Arc<SignInHandler>,
        sign_up_handler: Arc<SignUpHandler>,
        sign_out_handler: Arc<SignOutHandler>,
    ) -> Self {
        Self {
            sign_in_handler,
            sign_up_handler,
            sign_out_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/sign-in - Sign in and mount the hub
pub async fn sign_in(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    let cmd = SignInCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.sign_in_handler.handle(cmd).await {
        Ok(result) => {
            let response = SessionResponse::from(&result);
            spawn_fetches(&result.hub, result.pending);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/auth/sign-up - Register an account
pub async fn sign_up(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    let cmd = SignUpCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.sign_up_handler.handle(cmd).await {
        Ok(SignUpResult::SignedIn(result)) => {
            let response = SignUpResponse::SignedIn(SessionResponse::from(&result));
            spawn_fetches(&result.hub, result.pending);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Ok(SignUpResult::ConfirmationPending) => {
            let response = SignUpResponse::ConfirmationPending {
                message: CONFIRMATION_PENDING.to_string(),
            };
            (StatusCode::ACCEPTED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/auth/sign-out - End the caller's session
pub async fn sign_out(
    State(handlers): State<AuthHandlers>,
    RequireHub(active): RequireHub,
) -> Response {
    let cmd = SignOutCommand {
        access_token: active.access_token,
    };

    match handlers.sign_out_handler.handle(cmd).await {
        Ok(result) => {
            let response = SignOutResponse {
                revoked: result.revoked,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}
