//! RepositorySource port - recent public repositories for a username.

use async_trait::async_trait;

use crate::domain::hub::{RepoSummary, SourceError};

/// Lists a user's most recently updated repositories.
///
/// # Contract
///
/// - An empty username is a no-op returning an empty list, with no request
/// - At most [`REPO_LIMIT`](crate::domain::hub::REPO_LIMIT) entries
/// - Non-success responses map to `SourceError::Fetch`
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn recent_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, SourceError>;
}
