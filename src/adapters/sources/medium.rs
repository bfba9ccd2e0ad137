//! Medium adapter - Implementation of ArticleFeed via an RSS-to-JSON proxy.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SourcesConfig;
use crate::domain::hub::{
    extract_medium_username, medium_feed_url, ArticleSummary, SourceError, ARTICLE_LIMIT,
};
use crate::ports::ArticleFeed;

const FETCH_FAILED: &str = "Failed to fetch Medium articles";

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    items: Vec<FeedItem>,
}

#[derive(Debug, Deserialize)]
struct FeedItem {
    #[serde(default)]
    guid: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(rename = "pubDate", default)]
    pub_date: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    content: String,
}

impl From<FeedItem> for ArticleSummary {
    fn from(item: FeedItem) -> Self {
        ArticleSummary::from_feed(
            item.guid,
            item.title,
            item.link,
            &item.pub_date,
            &item.description,
            &item.content,
        )
    }
}

/// Latest Medium articles for a handle.
pub struct MediumArticles {
    rss2json_url: String,
    feed_base: String,
    user_agent: String,
    http_client: reqwest::Client,
}

impl MediumArticles {
    pub fn new(config: &SourcesConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            rss2json_url: config.rss2json_url.clone(),
            feed_base: config.medium_feed_base.clone(),
            user_agent: config.user_agent.clone(),
            http_client,
        }
    }
}

#[async_trait]
impl ArticleFeed for MediumArticles {
    async fn recent_articles(&self, handle: &str) -> Result<Vec<ArticleSummary>, SourceError> {
        let username = extract_medium_username(handle);
        if username.is_empty() {
            return Err(SourceError::invalid_input(handle));
        }

        let feed = medium_feed_url(&self.feed_base, &username);
        tracing::debug!(%username, %feed, "Fetching Medium articles");

        let response = self
            .http_client
            .get(&self.rss2json_url)
            .query(&[("rss_url", feed.as_str())])
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%username, "Medium feed request failed: {}", e);
                SourceError::fetch(FETCH_FAILED)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%username, %status, "Feed proxy returned non-success status");
            return Err(SourceError::fetch(FETCH_FAILED));
        }

        let body: FeedResponse = response.json().await.map_err(|e| {
            tracing::warn!(%username, "Failed to parse Medium feed: {}", e);
            SourceError::fetch(FETCH_FAILED)
        })?;

        // The proxy reports an unreadable feed in-band with a 200.
        if body.status.as_deref() == Some("error") {
            tracing::warn!(%username, "Feed proxy could not read the feed");
            return Err(SourceError::fetch(FETCH_FAILED));
        }

        Ok(body
            .items
            .into_iter()
            .take(ARTICLE_LIMIT)
            .map(ArticleSummary::from)
            .collect())
    }
}
