//! GitHub repository display model.

use serde::{Deserialize, Serialize};

/// Maximum number of repositories shown.
pub const REPO_LIMIT: usize = 6;

/// A repository as shown on the hub. Derived per fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub language: Option<String>,
}

impl RepoSummary {
    /// Description text, with the placeholder used for empty descriptions.
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "No description",
        }
    }
}
