//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `hub` - Professional Hub display models and aggregation rules

pub mod foundation;
pub mod hub;
