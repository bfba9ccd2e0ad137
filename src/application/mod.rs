//! Application layer - Commands, Handlers and the hub service.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Session handlers own the sign-in/sign-out lifecycle; the hub module owns
//! everything that happens while a session is live.

pub mod handlers;
pub mod hub;

pub use handlers::{
    SignInCommand, SignInHandler, SignInResult, SignOutCommand, SignOutHandler, SignOutResult,
    SignUpCommand, SignUpHandler, SignUpResult,
};
pub use hub::{HubError, HubPorts, HubRegistry, HubView, ProfessionalHub};
