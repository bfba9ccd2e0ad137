//! Professional Hub domain.
//!
//! Display models for the external-profile aggregation view and the pure
//! rules that build them:
//!
//! - `profile` - the persisted record of linked handles
//! - `repository`, `coding_stats`, `article` - derived per-source models
//! - `medium` - username extraction from free-form Medium handles
//! - `section` - per-section fetch lifecycle with stale-response discard
//! - `embed` - Twitter timeline embed marker

mod article;
mod coding_stats;
mod embed;
mod errors;
mod medium;
mod profile;
mod repository;
mod section;

pub use article::{
    first_image_src, reading_minutes, strip_tags, truncate_preview, ArticleSummary,
    ARTICLE_LIMIT, PREVIEW_CHARS,
};
pub use coding_stats::{CodingStats, Difficulty, DifficultyCount};
pub use embed::TwitterEmbed;
pub use errors::SourceError;
pub use medium::{extract_medium_username, medium_feed_url};
pub use profile::{LinkedProfile, ProfileField};
pub use repository::{RepoSummary, REPO_LIMIT};
pub use section::{FetchTicket, HubSection, Section, SectionStatus};
