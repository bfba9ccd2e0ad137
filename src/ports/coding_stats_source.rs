//! CodingStatsSource port - solved-problem statistics for a username.

use async_trait::async_trait;

use crate::domain::hub::{CodingStats, SourceError};

/// Fetches solved-problem counts and ranking.
///
/// # Contract
///
/// - `Ok(None)` when the service knows no such user (not an error)
/// - Non-success responses and unusable payloads map to `SourceError::Fetch`
#[async_trait]
pub trait CodingStatsSource: Send + Sync {
    async fn solved_stats(&self, username: &str) -> Result<Option<CodingStats>, SourceError>;
}
