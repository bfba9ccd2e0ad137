//! Test doubles for the section sources, answering from memory.
//!
//! Exported so integration tests can drive the full router without network
//! access; `main` always wires the real GitHub, LeetCode and Medium adapters.
//! Each keeps a per-handle table and counts the calls it receives, so tests
//! can assert that nothing was fetched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::hub::{
    extract_medium_username, ArticleSummary, CodingStats, RepoSummary, SourceError,
};
use crate::ports::{ArticleFeed, CodingStatsSource, RepositorySource};

/// Repositories by username; unknown users have none.
#[derive(Debug, Default)]
pub struct StaticRepositories {
    repos: HashMap<String, Vec<RepoSummary>>,
    failing: bool,
    calls: AtomicUsize,
}

impl StaticRepositories {
    pub fn with_user(mut self, username: impl Into<String>, repos: Vec<RepoSummary>) -> Self {
        self.repos.insert(username.into(), repos);
        self
    }

    /// Makes every call fail the way the real source does.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for StaticRepositories {
    async fn recent_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(SourceError::fetch("Failed to fetch repos"));
        }
        Ok(self.repos.get(username).cloned().unwrap_or_default())
    }
}

/// Stats by username; unknown users yield no stats.
#[derive(Debug, Default)]
pub struct StaticCodingStats {
    stats: HashMap<String, CodingStats>,
    calls: AtomicUsize,
}

impl StaticCodingStats {
    pub fn with_user(mut self, username: impl Into<String>, stats: CodingStats) -> Self {
        self.stats.insert(username.into(), stats);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodingStatsSource for StaticCodingStats {
    async fn solved_stats(&self, username: &str) -> Result<Option<CodingStats>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.stats.get(username).cloned())
    }
}

/// Articles by Medium username. Handles are resolved the same way the real
/// feed resolves them.
#[derive(Debug, Default)]
pub struct StaticArticleFeed {
    articles: HashMap<String, Vec<ArticleSummary>>,
    calls: AtomicUsize,
}

impl StaticArticleFeed {
    pub fn with_user(mut self, username: impl Into<String>, articles: Vec<ArticleSummary>) -> Self {
        self.articles.insert(username.into(), articles);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleFeed for StaticArticleFeed {
    async fn recent_articles(&self, handle: &str) -> Result<Vec<ArticleSummary>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let username = extract_medium_username(handle);
        if username.is_empty() {
            return Err(SourceError::invalid_input(handle));
        }
        Ok(self.articles.get(&username).cloned().unwrap_or_default())
    }
}
