//! ArticleFeed port - latest published articles for a handle.

use async_trait::async_trait;

use crate::domain::hub::{ArticleSummary, SourceError};

/// Fetches a writer's latest articles.
///
/// # Contract
///
/// - Takes the raw handle (URL or `@name`); a handle without a usable
///   username yields `SourceError::InvalidInput` and no request
/// - At most [`ARTICLE_LIMIT`](crate::domain::hub::ARTICLE_LIMIT) entries
/// - Non-success responses map to `SourceError::Fetch`
#[async_trait]
pub trait ArticleFeed: Send + Sync {
    async fn recent_articles(&self, handle: &str) -> Result<Vec<ArticleSummary>, SourceError>;
}
