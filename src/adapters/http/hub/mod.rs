//! HTTP adapter for hub endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::UpdateFieldRequest;
pub use routes::hub_routes;
