//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth/session types, error types and the
//! state machine trait used across the Progress Hub domain.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, Session, SessionContext};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
