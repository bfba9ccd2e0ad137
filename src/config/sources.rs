//! Third-party source endpoints

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Endpoints and client identity for the profile sources
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// GitHub REST API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// LeetCode GraphQL endpoint
    #[serde(default = "default_leetcode_graphql_url")]
    pub leetcode_graphql_url: String,

    /// RSS-to-JSON conversion endpoint
    #[serde(default = "default_rss2json_url")]
    pub rss2json_url: String,

    /// Base of Medium user feeds (`{base}/@{username}`)
    #[serde(default = "default_medium_feed_base")]
    pub medium_feed_base: String,

    /// User-Agent sent to every source (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SourcesConfig {
    /// Validate source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_url(&self.github_api_url, "sources.github_api_url")?;
        check_url(&self.leetcode_graphql_url, "sources.leetcode_graphql_url")?;
        check_url(&self.rss2json_url, "sources.rss2json_url")?;
        check_url(&self.medium_feed_base, "sources.medium_feed_base")?;
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SOURCES__USER_AGENT"));
        }
        Ok(())
    }
}

fn check_url(raw: &str, name: &'static str) -> Result<(), ValidationError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidUrl(name))
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            leetcode_graphql_url: default_leetcode_graphql_url(),
            rss2json_url: default_rss2json_url(),
            medium_feed_base: default_medium_feed_base(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_leetcode_graphql_url() -> String {
    "https://leetcode.com/graphql".to_string()
}

fn default_rss2json_url() -> String {
    "https://api.rss2json.com/v1/api.json".to_string()
}

fn default_medium_feed_base() -> String {
    "https://medium.com/feed".to_string()
}

fn default_user_agent() -> String {
    concat!("progress-hub/", env!("CARGO_PKG_VERSION")).to_string()
}
