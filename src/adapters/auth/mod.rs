//! Authentication adapters.
//!
//! Implementations of the `AuthProvider` port:
//!
//! - `gotrue` - The hosted backend's GoTrue auth API
//! - `mock` - In-memory implementation that doesn't require external services

mod gotrue;
mod mock;

pub use gotrue::GoTrueAuthProvider;
pub use mock::MockAuthProvider;
