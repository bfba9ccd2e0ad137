//! Source adapters for the hub sections.
//!
//! - `github` - recent repositories over the GitHub REST API
//! - `leetcode` - solved-problem stats over LeetCode GraphQL
//! - `medium` - latest articles via an RSS-to-JSON proxy
//! - `fixed` - canned in-memory test doubles; the server binary never wires them

mod fixed;
mod github;
mod leetcode;
mod medium;

pub use fixed::{StaticArticleFeed, StaticCodingStats, StaticRepositories};
pub use github::GithubRepositories;
pub use leetcode::LeetcodeStats;
pub use medium::MediumArticles;
