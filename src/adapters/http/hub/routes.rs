//! HTTP routes for hub endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{begin_edit, get_view, refresh, save, update_field};

/// Creates the hub router with all endpoints.
pub fn hub_routes() -> Router {
    Router::new()
        .route("/", get(get_view))
        .route("/edit", post(begin_edit))
        .route("/profile/:field", put(update_field))
        .route("/save", post(save))
        .route("/refresh", post(refresh))
}
