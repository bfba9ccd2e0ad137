//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence and identity
//!
//! - `ProfileStore` - load/save of the linked-profile record
//! - `AuthProvider` - sign-in, sign-up and sign-out against the auth service
//!
//! ## Sources
//!
//! - `RepositorySource` - recent repositories (GitHub)
//! - `CodingStatsSource` - solved-problem stats (LeetCode)
//! - `ArticleFeed` - latest articles (Medium)
//! - `EmbedLoader` - idempotent embed script initialization (Twitter)

mod article_feed;
mod auth_provider;
mod coding_stats_source;
mod embed_loader;
mod profile_store;
mod repository_source;

pub use article_feed::ArticleFeed;
pub use auth_provider::{AuthProvider, SignUpOutcome};
pub use coding_stats_source::CodingStatsSource;
pub use embed_loader::{EmbedActivation, EmbedLoader};
pub use profile_store::{ProfileStore, ProfileStoreError};
pub use repository_source::RepositorySource;
