//! LeetCode adapter - Implementation of CodingStatsSource over GraphQL.
//!
//! A single parameterized query fetches accepted-submission counts per
//! difficulty and the global ranking. The username travels in `variables`,
//! never interpolated into the query text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::SourcesConfig;
use crate::domain::hub::{CodingStats, SourceError};
use crate::ports::CodingStatsSource;

const FETCH_FAILED: &str = "Failed to fetch LeetCode stats";

const SOLVED_QUERY: &str = "query userProblemsSolved($username: String!) { \
    matchedUser(username: $username) { \
        submitStatsGlobal { acSubmissionNum { difficulty count } } \
        profile { ranking } \
    } \
}";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    username: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<SolvedData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolvedData {
    #[serde(default)]
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats_global: SubmitStats,
    #[serde(default)]
    profile: Option<RankingProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    #[serde(default)]
    ac_submission_num: Vec<SubmissionCount>,
}

#[derive(Debug, Deserialize)]
struct SubmissionCount {
    difficulty: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct RankingProfile {
    #[serde(default)]
    ranking: Option<u64>,
}

impl From<MatchedUser> for CodingStats {
    fn from(user: MatchedUser) -> Self {
        let ranking = user.profile.and_then(|p| p.ranking);
        let rows = user
            .submit_stats_global
            .ac_submission_num
            .iter()
            .map(|row| (row.difficulty.as_str(), row.count));
        CodingStats::from_rows(rows, ranking)
    }
}

/// Solved-problem stats from LeetCode's GraphQL endpoint.
pub struct LeetcodeStats {
    graphql_url: String,
    user_agent: String,
    http_client: reqwest::Client,
}

impl LeetcodeStats {
    pub fn new(config: &SourcesConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            graphql_url: config.leetcode_graphql_url.clone(),
            user_agent: config.user_agent.clone(),
            http_client,
        }
    }
}

#[async_trait]
impl CodingStatsSource for LeetcodeStats {
    async fn solved_stats(&self, username: &str) -> Result<Option<CodingStats>, SourceError> {
        if username.is_empty() {
            return Ok(None);
        }
        tracing::debug!(%username, "Fetching LeetCode stats");

        let response = self
            .http_client
            .post(&self.graphql_url)
            .header("User-Agent", &self.user_agent)
            .json(&GraphQlRequest {
                query: SOLVED_QUERY,
                variables: Variables { username },
            })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%username, "LeetCode request failed: {}", e);
                SourceError::fetch(FETCH_FAILED)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%username, %status, "LeetCode returned non-success status");
            return Err(SourceError::fetch(FETCH_FAILED));
        }

        let body: GraphQlResponse = response.json().await.map_err(|e| {
            tracing::warn!(%username, "Failed to parse LeetCode response: {}", e);
            SourceError::fetch(FETCH_FAILED)
        })?;

        let stats = body
            .data
            .and_then(|data| data.matched_user)
            .map(CodingStats::from);
        if stats.is_none() {
            tracing::debug!(%username, "LeetCode has no such user");
        }
        Ok(stats)
    }
}
