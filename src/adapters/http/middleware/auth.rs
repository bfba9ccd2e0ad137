//! Session middleware and extractors for axum.
//!
//! This module provides:
//! - `hub_session_middleware` - Layer that resolves a Bearer token to the
//!   caller's mounted hub and injects it into extensions
//! - `RequireHub` - Extractor that requires a live session
//!
//! # Architecture
//!
//! Tokens are not validated remotely on every request. A token is valid for
//! as long as the `HubRegistry` holds a hub for it: sign-in registers one,
//! sign-out or token expiry removes it.
//!
//! ```text
//! Request → hub_session_middleware → injects ActiveHub into extensions
//!                                          ↓
//!                                  Handler → RequireHub extractor reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::hub::{HubRegistry, ProfessionalHub};

/// The caller's hub, resolved from its access token.
#[derive(Clone)]
pub struct ActiveHub {
    pub access_token: String,
    pub hub: Arc<ProfessionalHub>,
}

impl std::fmt::Debug for ActiveHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveHub").finish_non_exhaustive()
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|token| !token.is_empty())
}

/// Session middleware that resolves Bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Looks up the hub registered for that token
/// 3. On success, injects `ActiveHub` into request extensions
/// 4. On missing token, continues without injecting
/// 5. On unknown or expired token, returns 401 Unauthorized
pub async fn hub_session_middleware(
    State(hubs): State<Arc<HubRegistry>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match hubs.get(&token).await {
        Some(hub) => {
            request.extensions_mut().insert(ActiveHub {
                access_token: token,
                hub,
            });
            next.run(request).await
        }
        None => {
            tracing::debug!("Request with unknown or expired session token");
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "error": "Invalid or expired token",
                    "code": "AUTH_ERROR"
                })),
            )
                .into_response()
        }
    }
}

/// Extractor that requires a live session.
///
/// If no hub is in the request extensions (i.e., the middleware did not
/// resolve a token), returns 401 Unauthorized.
#[derive(Debug, Clone)]
pub struct RequireHub(pub ActiveHub);

impl<S> axum::extract::FromRequestParts<S> for RequireHub
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<ActiveHub>()
                .cloned()
                .map(RequireHub)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No session token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::embed::TwitterWidgets;
    use crate::adapters::profile::InMemoryProfileStore;
    use crate::adapters::sources::{StaticArticleFeed, StaticCodingStats, StaticRepositories};
    use crate::application::hub::HubPorts;
    use crate::domain::foundation::{AuthenticatedUser, Session, UserId};
    use axum::body::Body;
    use axum::extract::FromRequestParts;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn registry() -> Arc<HubRegistry> {
        Arc::new(HubRegistry::new(HubPorts {
            store: Arc::new(InMemoryProfileStore::new()),
            repositories: Arc::new(StaticRepositories::default()),
            coding_stats: Arc::new(StaticCodingStats::default()),
            articles: Arc::new(StaticArticleFeed::default()),
            embeds: Arc::new(TwitterWidgets::new(
                "https://platform.twitter.com/widgets.js",
                400,
            )),
        }))
    }

    fn session(token: &str) -> Session {
        let user = AuthenticatedUser::new(UserId::new("user-1").unwrap(), "me@example.com");
        Session::new(user, token)
    }

    async fn protected(RequireHub(active): RequireHub) -> String {
        active.access_token
    }

    fn app(hubs: Arc<HubRegistry>) -> Router {
        Router::new()
            .route("/protected", get(protected))
            .layer(axum::middleware::from_fn_with_state(hubs, hub_session_middleware))
    }

    fn request(auth: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri("/protected");
        if let Some(value) = auth {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Middleware Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn known_token_reaches_handler() {
        let hubs = registry();
        hubs.open(session("token-1"));

        let response = app(hubs).oneshot(request(Some("Bearer token-1"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected_by_middleware() {
        let response = app(registry())
            .oneshot(request(Some("Bearer nope")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_token_is_rejected_by_extractor() {
        let response = app(registry()).oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn closed_hub_token_stops_working() {
        let hubs = registry();
        hubs.open(session("token-1"));
        hubs.close("token-1");

        let response = app(hubs).oneshot(request(Some("Bearer token-1"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_token_is_rejected_and_evicted() {
        let hubs = registry();
        hubs.open(session("token-1").expiring_in(0));

        let response = app(hubs.clone())
            .oneshot(request(Some("Bearer token-1")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(hubs.is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RequireHub Extractor Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn require_hub_fails_without_extension() {
        let request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireHub, AuthRejection> =
            RequireHub::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[test]
    fn bearer_token_extraction() {
        assert_eq!(bearer_token("Bearer my-secret-token"), Some("my-secret-token"));
        assert_eq!(bearer_token("my-secret-token"), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("Bearer "), None);
    }

    #[test]
    fn auth_rejection_returns_401() {
        let response = AuthRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn require_hub_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequireHub>();
    }
}
