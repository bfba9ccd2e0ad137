//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Bearer-token lookup of the caller's mounted hub

pub mod auth;

pub use auth::{hub_session_middleware, ActiveHub, AuthRejection, RequireHub};
