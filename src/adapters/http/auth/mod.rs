//! HTTP adapter for auth endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CredentialsRequest, SessionResponse, SignOutResponse, SignUpResponse, UserResponse};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
