//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Hosted auth service (GoTrue) and an in-memory mock
//! - `profile` - Linked-profile storage (PostgREST table, in-memory)
//! - `sources` - GitHub, LeetCode and Medium clients
//! - `embed` - Twitter widgets loader
//! - `http` - axum routes exposing sign-in and the hub

pub mod auth;
pub mod embed;
pub mod http;
pub mod profile;
pub mod sources;

#[cfg(test)]
pub(crate) mod testing;
