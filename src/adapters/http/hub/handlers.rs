//! HTTP handlers for hub endpoints.
//!
//! Every endpoint answers with the hub view as it stands once the command
//! has been applied. Section fetches triggered by a command run in the
//! background; clients poll `GET /api/hub` to see them settle.

use std::str::FromStr;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireHub;
use crate::adapters::http::spawn_fetches;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::hub::ProfileField;

use super::dto::UpdateFieldRequest;

/// GET /api/hub - Current hub view
pub async fn get_view(RequireHub(active): RequireHub) -> Response {
    let view = active.hub.view().await;
    (StatusCode::OK, Json(view)).into_response()
}

/// POST /api/hub/edit - Unlock profile fields
pub async fn begin_edit(RequireHub(active): RequireHub) -> Response {
    match active.hub.begin_edit().await {
        Ok(()) => (StatusCode::OK, Json(active.hub.view().await)).into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/hub/profile/:field - Update one field while editing
pub async fn update_field(
    RequireHub(active): RequireHub,
    Path(field): Path<String>,
    Json(req): Json<UpdateFieldRequest>,
) -> Response {
    let field = match ProfileField::from_str(&field) {
        Ok(field) => field,
        Err(e) => {
            return error_response(
                DomainError::new(ErrorCode::UnknownField, e.to_string()).with_detail("field", field),
            )
        }
    };

    match active.hub.set_field(field, req.value).await {
        Ok(ticket) => {
            spawn_fetches(&active.hub, ticket.into_iter().collect());
            (StatusCode::OK, Json(active.hub.view().await)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/hub/save - Persist the profile and refresh every section
pub async fn save(RequireHub(active): RequireHub) -> Response {
    match active.hub.save().await {
        Ok(tickets) => {
            spawn_fetches(&active.hub, tickets);
            (StatusCode::OK, Json(active.hub.view().await)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/hub/refresh - Re-fetch every linked section
pub async fn refresh(RequireHub(active): RequireHub) -> Response {
    let tickets = active.hub.begin_refresh().await;
    spawn_fetches(&active.hub, tickets);
    (StatusCode::ACCEPTED, Json(active.hub.view().await)).into_response()
}
