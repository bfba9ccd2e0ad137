//! GitHub adapter - Implementation of RepositorySource over the REST API.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::config::SourcesConfig;
use crate::domain::hub::{RepoSummary, SourceError, REPO_LIMIT};
use crate::ports::RepositorySource;

const FETCH_FAILED: &str = "Failed to fetch repos";

/// Repository item as returned by `GET /users/{username}/repos`.
#[derive(Debug, Deserialize)]
struct GithubRepo {
    id: u64,
    name: String,
    html_url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    language: Option<String>,
}

impl From<GithubRepo> for RepoSummary {
    fn from(repo: GithubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            url: repo.html_url,
            description: repo.description,
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            language: repo.language,
        }
    }
}

/// Recently updated public repositories of a GitHub user.
pub struct GithubRepositories {
    api_url: String,
    user_agent: String,
    http_client: reqwest::Client,
}

impl GithubRepositories {
    pub fn new(config: &SourcesConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url: config.github_api_url.clone(),
            user_agent: config.user_agent.clone(),
            http_client,
        }
    }

    /// `{api}/users/{username}/repos?sort=updated&per_page=6`, with the
    /// username percent-encoded as a single path segment.
    fn repos_url(&self, username: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.api_url).map_err(|e| {
            tracing::error!("Invalid GitHub API URL {}: {}", self.api_url, e);
            SourceError::fetch(FETCH_FAILED)
        })?;
        url.path_segments_mut()
            .map_err(|_| SourceError::fetch(FETCH_FAILED))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &REPO_LIMIT.to_string());
        Ok(url)
    }
}

#[async_trait]
impl RepositorySource for GithubRepositories {
    async fn recent_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, SourceError> {
        if username.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.repos_url(username)?;
        tracing::debug!(%username, "Fetching GitHub repositories");

        let response = self
            .http_client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%username, "GitHub request failed: {}", e);
                SourceError::fetch(FETCH_FAILED)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%username, %status, "GitHub returned non-success status");
            return Err(SourceError::fetch(FETCH_FAILED));
        }

        let repos: Vec<GithubRepo> = response.json().await.map_err(|e| {
            tracing::warn!(%username, "Failed to parse GitHub repositories: {}", e);
            SourceError::fetch(FETCH_FAILED)
        })?;

        Ok(repos.into_iter().take(REPO_LIMIT).map(RepoSummary::from).collect())
    }
}
