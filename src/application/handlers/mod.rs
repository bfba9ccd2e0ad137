//! Application handlers.
//!
//! Command handlers that orchestrate auth and hub operations.

pub mod session;

pub use session::{
    SignInCommand, SignInHandler, SignInResult, SignOutCommand, SignOutHandler, SignOutResult,
    SignUpCommand, SignUpHandler, SignUpResult,
};
