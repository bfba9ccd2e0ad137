//! HTTP adapters - REST API implementations.
//!
//! - `auth` - sign-in, sign-up and sign-out
//! - `hub` - the signed-in user's Professional Hub
//!
//! Both sit behind the session middleware, which resolves Bearer tokens to
//! mounted hubs.

pub mod auth;
pub mod error;
pub mod hub;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::application::hub::{HubRegistry, ProfessionalHub};
use crate::application::{SignInHandler, SignOutHandler, SignUpHandler};
use crate::config::ServerConfig;
use crate::domain::hub::FetchTicket;
use crate::ports::AuthProvider;

pub use auth::{auth_routes, AuthHandlers};
pub use error::{error_response, ErrorResponse};
pub use hub::hub_routes;
pub use middleware::{hub_session_middleware, ActiveHub, RequireHub};

/// Everything the HTTP surface needs.
#[derive(Clone)]
pub struct AppState {
    pub hubs: Arc<HubRegistry>,
    pub auth: AuthHandlers,
}

impl AppState {
    pub fn new(provider: Arc<dyn AuthProvider>, hubs: Arc<HubRegistry>) -> Self {
        let auth = AuthHandlers::new(
            Arc::new(SignInHandler::new(provider.clone(), hubs.clone())),
            Arc::new(SignUpHandler::new(provider.clone(), hubs.clone())),
            Arc::new(SignOutHandler::new(provider, hubs.clone())),
        );
        Self { hubs, auth }
    }
}

/// Runs section fetches in the background.
pub(crate) fn spawn_fetches(hub: &Arc<ProfessionalHub>, tickets: Vec<FetchTicket>) {
    if tickets.is_empty() {
        return;
    }
    let hub = hub.clone();
    tokio::spawn(async move {
        hub.run_all(tickets).await;
    });
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "progress-hub",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// The API routes with the session middleware, without server layers.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/auth", auth_routes(state.auth))
        .nest("/api/hub", hub_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.hubs,
            hub_session_middleware,
        ))
        .route("/health", get(health_check))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// The full application: API routes plus tracing, CORS and request timeout.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    api_router(state).layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(cors_layer(config))
            .layer(TimeoutLayer::new(config.request_timeout())),
    )
}
