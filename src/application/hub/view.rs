//! Serializable snapshot of the hub for rendering.

use serde::Serialize;

use crate::domain::hub::{
    ArticleSummary, CodingStats, DifficultyCount, LinkedProfile, ProfileField, RepoSummary,
    Section, SectionStatus, TwitterEmbed,
};

pub const NO_REPOSITORIES: &str = "No repositories found.";
pub const NO_ARTICLES: &str = "No articles found.";
pub const CONNECT_LEETCODE: &str = "Connect your LeetCode username to see stats.";

/// Everything a client needs to draw the hub.
#[derive(Debug, Clone, Serialize)]
pub struct HubView {
    pub mounted: bool,
    pub editing: bool,
    pub saving: bool,
    /// Set when the stored profile could not be loaded; the hub then runs
    /// on an empty profile.
    pub profile_error: Option<String>,
    pub fields: Vec<FieldView>,
    pub github: SectionView<Vec<RepoView>>,
    pub leetcode: SectionView<Option<StatsView>>,
    pub medium: SectionView<Vec<ArticleView>>,
    pub twitter: Option<TwitterEmbed>,
}

/// One editable profile field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub field: ProfileField,
    pub label: &'static str,
    pub value: String,
    /// Fields are only editable in edit mode.
    pub locked: bool,
}

/// Render state of one adapter-backed section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView<T> {
    pub status: SectionStatus,
    pub items: T,
    pub error: Option<String>,
    /// Placeholder text shown instead of items.
    pub empty_text: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepoView {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub description: String,
    pub star_count: u64,
    pub fork_count: u64,
    pub language: Option<String>,
}

impl From<&RepoSummary> for RepoView {
    fn from(repo: &RepoSummary) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            url: repo.url.clone(),
            description: repo.description_or_placeholder().to_string(),
            star_count: repo.star_count,
            fork_count: repo.fork_count,
            language: repo.language.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub counts: Vec<DifficultyCount>,
    pub ranking: String,
}

impl From<&CodingStats> for StatsView {
    fn from(stats: &CodingStats) -> Self {
        Self {
            counts: stats.counts.clone(),
            ranking: stats.ranking_label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub link: String,
    pub published: String,
    pub preview_text: String,
    pub thumbnail_url: Option<String>,
    pub reading_time: String,
}

impl From<&ArticleSummary> for ArticleView {
    fn from(article: &ArticleSummary) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            link: article.link.clone(),
            published: article.published_label(),
            preview_text: article.preview_text.clone(),
            thumbnail_url: article.thumbnail_url.clone(),
            reading_time: format!("{} min read", article.reading_minutes),
        }
    }
}

pub(super) fn fields(profile: &LinkedProfile, editing: bool) -> Vec<FieldView> {
    ProfileField::ALL
        .into_iter()
        .map(|field| FieldView {
            field,
            label: field.label(),
            value: profile.get(field).to_string(),
            locked: !editing,
        })
        .collect()
}

pub(super) fn github(section: &Section<Vec<RepoSummary>>) -> SectionView<Vec<RepoView>> {
    let items: Vec<RepoView> = section.data().iter().map(RepoView::from).collect();
    let empty_text = list_placeholder(section.status(), items.is_empty(), NO_REPOSITORIES);
    SectionView {
        status: section.status(),
        items,
        error: section.error().map(str::to_string),
        empty_text,
    }
}

pub(super) fn leetcode(section: &Section<Option<CodingStats>>) -> SectionView<Option<StatsView>> {
    let items = section.data().as_ref().map(StatsView::from);
    // The prompt shows whenever there are no stats, loading included.
    let empty_text = items.is_none().then_some(CONNECT_LEETCODE);
    SectionView {
        status: section.status(),
        items,
        error: section.error().map(str::to_string),
        empty_text,
    }
}

pub(super) fn medium(section: &Section<Vec<ArticleSummary>>) -> SectionView<Vec<ArticleView>> {
    let items: Vec<ArticleView> = section.data().iter().map(ArticleView::from).collect();
    let empty_text = list_placeholder(section.status(), items.is_empty(), NO_ARTICLES);
    SectionView {
        status: section.status(),
        items,
        error: section.error().map(str::to_string),
        empty_text,
    }
}

fn list_placeholder(status: SectionStatus, empty: bool, text: &'static str) -> Option<&'static str> {
    (empty && status != SectionStatus::Loading).then_some(text)
}
