//! HTTP routes for auth endpoints.

use axum::{routing::post, Router};

use super::handlers::{sign_in, sign_out, sign_up, AuthHandlers};

/// Creates the auth router with all endpoints.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-up", post(sign_up))
        .route("/sign-out", post(sign_out))
        .with_state(handlers)
}
