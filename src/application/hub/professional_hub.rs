//! ProfessionalHub - aggregation view over the linked external profiles.
//!
//! Owns the profile lifecycle for one signed-in session and turns handle
//! changes into section fetches. Fetching is split in two steps so callers
//! decide where the network work runs:
//!
//! 1. An operation (`mount`, `set_field`, `save`, `begin_refresh`) updates
//!    state under the lock and returns [`FetchTicket`]s for every section
//!    that entered `Loading`.
//! 2. [`ProfessionalHub::run`] / [`ProfessionalHub::run_all`] perform the
//!    fetches without holding the lock and commit the results. A result whose
//!    ticket has been superseded is discarded.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionContext;
use crate::domain::hub::{
    ArticleSummary, CodingStats, FetchTicket, HubSection, LinkedProfile, ProfileField,
    RepoSummary, Section, SourceError, TwitterEmbed,
};
use crate::ports::{
    ArticleFeed, CodingStatsSource, EmbedLoader, ProfileStore, ProfileStoreError,
    RepositorySource,
};

use super::errors::HubError;
use super::view::{self, HubView};

/// The ports a hub talks to.
#[derive(Clone)]
pub struct HubPorts {
    pub store: Arc<dyn ProfileStore>,
    pub repositories: Arc<dyn RepositorySource>,
    pub coding_stats: Arc<dyn CodingStatsSource>,
    pub articles: Arc<dyn ArticleFeed>,
    pub embeds: Arc<dyn EmbedLoader>,
}

#[derive(Debug, Default)]
struct HubState {
    mounted: bool,
    editing: bool,
    saving: bool,
    profile: LinkedProfile,
    profile_error: Option<String>,
    github: Section<Vec<RepoSummary>>,
    leetcode: Section<Option<CodingStats>>,
    medium: Section<Vec<ArticleSummary>>,
    twitter: Option<TwitterEmbed>,
}

impl HubState {
    fn begin(&mut self, section: HubSection) -> Option<FetchTicket> {
        let handle = self.profile.handle_for(section).to_string();
        let ticket = match section {
            HubSection::Github => self.github.begin(section, &handle),
            HubSection::Leetcode => self.leetcode.begin(section, &handle),
            HubSection::Medium => self.medium.begin(section, &handle),
        };
        if ticket.is_none() {
            tracing::debug!(%section, "Section idle, no handle linked");
        }
        ticket
    }

    fn begin_all(&mut self) -> Vec<FetchTicket> {
        HubSection::ALL
            .into_iter()
            .filter_map(|section| self.begin(section))
            .collect()
    }
}

/// Aggregation view for one signed-in session.
pub struct ProfessionalHub {
    session: Arc<SessionContext>,
    ports: HubPorts,
    state: RwLock<HubState>,
}

impl ProfessionalHub {
    pub fn new(session: Arc<SessionContext>, ports: HubPorts) -> Self {
        Self {
            session,
            ports,
            state: RwLock::new(HubState::default()),
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Loads the stored profile and starts every section with a handle.
    ///
    /// A remote load failure does not fail the mount: the hub continues on an
    /// empty profile and reports the failure in [`HubView::profile_error`].
    /// An ended session does fail it.
    pub async fn mount(&self) -> Result<Vec<FetchTicket>, HubError> {
        let loaded = match self.ports.store.load(&self.session).await {
            Ok(profile) => Ok(profile.unwrap_or_default()),
            Err(ProfileStoreError::Auth(err)) => return Err(err.into()),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load linked profile");
                Err(err.to_string())
            }
        };

        let mut state = self.state.write().await;
        match loaded {
            Ok(profile) => {
                state.profile = profile;
                state.profile_error = None;
            }
            Err(message) => {
                state.profile = LinkedProfile::default();
                state.profile_error = Some(message);
            }
        }
        state.mounted = true;
        state.editing = false;
        self.sync_embed(&mut state);

        Ok(state.begin_all())
    }

    /// Unlocks the profile fields.
    pub async fn begin_edit(&self) -> Result<(), HubError> {
        self.session.current()?;
        self.state.write().await.editing = true;
        Ok(())
    }

    /// Updates one field while editing.
    ///
    /// Fields are locked while a save is in flight. Returns a ticket when the field feeds a section and its value changed.
    pub async fn set_field(
        &self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<Option<FetchTicket>, HubError> {
        self.session.current()?;
        let mut state = self.state.write().await;
        if !state.editing {
            return Err(HubError::NotEditing);
        }
        if state.saving {
            return Err(HubError::SaveInProgress);
        }
        if !state.profile.set(field, value) {
            return Ok(None);
        }
        if field == ProfileField::TwitterUrl {
            self.sync_embed(&mut state);
        }

        Ok(field.section().and_then(|section| state.begin(section)))
    }

    /// Persists the profile.
    ///
    /// Only a successful save leaves edit mode and restarts every section; a
    /// failed one keeps the edits in place so the user can retry.
    pub async fn save(&self) -> Result<Vec<FetchTicket>, HubError> {
        let profile = {
            let mut state = self.state.write().await;
            if !state.editing {
                return Err(HubError::NotEditing);
            }
            if state.saving {
                return Err(HubError::SaveInProgress);
            }
            state.saving = true;
            state.profile.clone()
        };

        let result = self.ports.store.save(&self.session, &profile).await;

        let mut state = self.state.write().await;
        state.saving = false;
        match result {
            Ok(()) => {
                tracing::info!("Linked profile saved");
                state.editing = false;
                state.profile_error = None;
                Ok(state.begin_all())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to save linked profile");
                Err(err.into())
            }
        }
    }

    /// Restarts every section with its current handle.
    pub async fn begin_refresh(&self) -> Vec<FetchTicket> {
        self.state.write().await.begin_all()
    }

    /// Restarts and fetches every section, returning once all have settled.
    pub async fn refresh_all(&self) {
        let tickets = self.begin_refresh().await;
        self.run_all(tickets).await;
    }

    /// Runs the given fetches concurrently.
    pub async fn run_all(&self, tickets: Vec<FetchTicket>) {
        join_all(tickets.into_iter().map(|ticket| self.run(ticket))).await;
    }

    /// Performs one section fetch and commits the outcome if still current.
    pub async fn run(&self, ticket: FetchTicket) {
        tracing::debug!(
            section = %ticket.section,
            handle = %ticket.handle,
            generation = ticket.generation(),
            "Fetching section"
        );

        let committed = match ticket.section {
            HubSection::Github => {
                let result = self.ports.repositories.recent_repositories(&ticket.handle).await;
                settle(&mut self.state.write().await.github, &ticket, result)
            }
            HubSection::Leetcode => {
                let result = self.ports.coding_stats.solved_stats(&ticket.handle).await;
                settle(&mut self.state.write().await.leetcode, &ticket, result)
            }
            HubSection::Medium => {
                let result = self.ports.articles.recent_articles(&ticket.handle).await;
                settle(&mut self.state.write().await.medium, &ticket, result)
            }
        };

        if !committed {
            tracing::debug!(
                section = %ticket.section,
                handle = %ticket.handle,
                "Discarded stale section response"
            );
        }
    }

    /// Snapshot for rendering.
    pub async fn view(&self) -> HubView {
        let state = self.state.read().await;
        HubView {
            mounted: state.mounted,
            editing: state.editing,
            saving: state.saving,
            profile_error: state.profile_error.clone(),
            fields: view::fields(&state.profile, state.editing),
            github: view::github(&state.github),
            leetcode: view::leetcode(&state.leetcode),
            medium: view::medium(&state.medium),
            twitter: state.twitter.clone(),
        }
    }

    pub async fn profile(&self) -> LinkedProfile {
        self.state.read().await.profile.clone()
    }

    /// Discards the profile copy and all derived state.
    ///
    /// Fetches still in flight are discarded when they complete.
    pub async fn unmount(&self) {
        let mut state = self.state.write().await;
        state.github.clear();
        state.leetcode.clear();
        state.medium.clear();
        state.profile = LinkedProfile::default();
        state.profile_error = None;
        state.twitter = None;
        state.editing = false;
        state.mounted = false;
        tracing::debug!("Hub unmounted");
    }

    fn sync_embed(&self, state: &mut HubState) {
        let url = state.profile.get(ProfileField::TwitterUrl);
        if url.is_empty() {
            state.twitter = None;
            return;
        }

        let activation = self.ports.embeds.activate();
        tracing::debug!(?activation, "Twitter embed activated");
        state.twitter = Some(TwitterEmbed {
            timeline_url: url.to_string(),
            script_src: self.ports.embeds.script_src().to_string(),
            height: self.ports.embeds.height(),
        });
    }
}

fn settle<T: Default>(
    section: &mut Section<T>,
    ticket: &FetchTicket,
    result: Result<T, SourceError>,
) -> bool {
    match result {
        Ok(data) => section.complete(ticket, data),
        Err(SourceError::InvalidInput(handle)) => {
            tracing::debug!(section = %ticket.section, %handle, "Fetch suppressed for unusable handle");
            section.suppress(ticket)
        }
        Err(err) => {
            tracing::warn!(section = %ticket.section, handle = %ticket.handle, error = %err, "Section fetch failed");
            section.fail(ticket, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::hub::view::{CONNECT_LEETCODE, NO_ARTICLES, NO_REPOSITORIES};
    use crate::domain::foundation::{AuthError, AuthenticatedUser, Session, UserId};
    use crate::domain::hub::SectionStatus;
    use crate::ports::EmbedActivation;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    // ════════════════════════════════════════════════════════════════════════
    // Test doubles
    // ════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct StubStore {
        stored: Mutex<Option<LinkedProfile>>,
        saves: Mutex<Vec<LinkedProfile>>,
        fail_load: bool,
        fail_save: bool,
        save_gate: Option<Arc<Notify>>,
    }

    impl StubStore {
        fn with_profile(profile: LinkedProfile) -> Self {
            Self {
                stored: Mutex::new(Some(profile)),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ProfileStore for StubStore {
        async fn load(
            &self,
            ctx: &SessionContext,
        ) -> Result<Option<LinkedProfile>, ProfileStoreError> {
            ctx.current()?;
            if self.fail_load {
                return Err(ProfileStoreError::remote("503 Service Unavailable"));
            }
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(
            &self,
            ctx: &SessionContext,
            profile: &LinkedProfile,
        ) -> Result<(), ProfileStoreError> {
            ctx.current()?;
            if let Some(gate) = &self.save_gate {
                gate.notified().await;
            }
            if self.fail_save {
                return Err(ProfileStoreError::remote("500 Internal Server Error"));
            }
            self.saves.lock().unwrap().push(profile.clone());
            *self.stored.lock().unwrap() = Some(profile.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct StubRepos {
        calls: AtomicUsize,
        fail: bool,
        gate: Option<(String, Arc<Notify>)>,
    }

    #[async_trait]
    impl RepositorySource for StubRepos {
        async fn recent_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some((handle, gate)) = &self.gate {
                if handle == username {
                    gate.notified().await;
                }
            }
            if self.fail {
                return Err(SourceError::fetch("Failed to fetch repos"));
            }
            Ok(vec![RepoSummary {
                id: 1,
                name: format!("{}-repo", username),
                url: format!("https://github.com/{}/repo", username),
                description: None,
                star_count: 3,
                fork_count: 1,
                language: Some("Rust".to_string()),
            }])
        }
    }

    #[derive(Default)]
    struct StubStats {
        calls: AtomicUsize,
        unknown_user: bool,
    }

    #[async_trait]
    impl CodingStatsSource for StubStats {
        async fn solved_stats(&self, _username: &str) -> Result<Option<CodingStats>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.unknown_user {
                return Ok(None);
            }
            Ok(Some(CodingStats::from_rows(
                [("All", 60), ("Easy", 30), ("Medium", 20), ("Hard", 10)],
                Some(12345),
            )))
        }
    }

    #[derive(Default)]
    struct StubArticles {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ArticleFeed for StubArticles {
        async fn recent_articles(&self, handle: &str) -> Result<Vec<ArticleSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if crate::domain::hub::extract_medium_username(handle).is_empty() {
                return Err(SourceError::invalid_input(handle));
            }
            Ok(vec![ArticleSummary::from_feed(
                "guid-1",
                "Learning Rust",
                "https://medium.com/@writer/learning-rust",
                "2024-03-05 10:00:00",
                "<p>Ownership explained</p>",
                "",
            )])
        }
    }

    #[derive(Default)]
    struct StubEmbeds {
        activations: AtomicUsize,
    }

    impl EmbedLoader for StubEmbeds {
        fn activate(&self) -> EmbedActivation {
            match self.activations.fetch_add(1, Ordering::SeqCst) {
                0 => EmbedActivation::Loaded,
                _ => EmbedActivation::Rescanned,
            }
        }

        fn script_src(&self) -> &str {
            "https://platform.twitter.com/widgets.js"
        }

        fn height(&self) -> u32 {
            400
        }
    }

    struct Fixture {
        store: Arc<StubStore>,
        repos: Arc<StubRepos>,
        stats: Arc<StubStats>,
        articles: Arc<StubArticles>,
        embeds: Arc<StubEmbeds>,
    }

    impl Fixture {
        fn new(store: StubStore) -> Self {
            Self {
                store: Arc::new(store),
                repos: Arc::new(StubRepos::default()),
                stats: Arc::new(StubStats::default()),
                articles: Arc::new(StubArticles::default()),
                embeds: Arc::new(StubEmbeds::default()),
            }
        }

        fn hub(&self) -> Arc<ProfessionalHub> {
            let ports = HubPorts {
                store: self.store.clone(),
                repositories: self.repos.clone(),
                coding_stats: self.stats.clone(),
                articles: self.articles.clone(),
                embeds: self.embeds.clone(),
            };
            Arc::new(ProfessionalHub::new(Arc::new(test_context()), ports))
        }

        fn network_calls(&self) -> usize {
            self.repos.calls.load(Ordering::SeqCst)
                + self.stats.calls.load(Ordering::SeqCst)
                + self.articles.calls.load(Ordering::SeqCst)
        }
    }

    fn test_context() -> SessionContext {
        let user = AuthenticatedUser::new(UserId::new("user-1").unwrap(), "me@example.com");
        SessionContext::start(Session::new(user, "access-token"))
    }

    fn linked_profile() -> LinkedProfile {
        let mut profile = LinkedProfile::default();
        profile.set(ProfileField::GithubUsername, "octocat");
        profile.set(ProfileField::LeetcodeUsername, "lc_user");
        profile.set(ProfileField::MediumUrl, "https://medium.com/@writer");
        profile
    }

    // ════════════════════════════════════════════════════════════════════════
    // Mount
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn mount_with_all_handles_empty_makes_no_calls() {
        let fixture = Fixture::new(StubStore::default());
        let hub = fixture.hub();

        let tickets = hub.mount().await.unwrap();
        hub.run_all(tickets).await;

        let view = hub.view().await;
        assert!(view.mounted);
        assert_eq!(fixture.network_calls(), 0);
        assert_eq!(view.github.status, SectionStatus::Idle);
        assert!(view.github.items.is_empty());
        assert_eq!(view.github.empty_text, Some(NO_REPOSITORIES));
        assert_eq!(view.leetcode.empty_text, Some(CONNECT_LEETCODE));
        assert_eq!(view.medium.empty_text, Some(NO_ARTICLES));
        assert!(view.twitter.is_none());
    }

    #[tokio::test]
    async fn mount_fetches_every_linked_section() {
        let fixture = Fixture::new(StubStore::with_profile(linked_profile()));
        let hub = fixture.hub();

        let tickets = hub.mount().await.unwrap();
        assert_eq!(tickets.len(), 3);
        hub.run_all(tickets).await;

        let view = hub.view().await;
        assert_eq!(view.github.status, SectionStatus::Loaded);
        assert_eq!(view.github.items[0].name, "octocat-repo");
        assert_eq!(view.github.items[0].description, "No description");

        let stats = view.leetcode.items.unwrap();
        assert_eq!(stats.counts.len(), 3);
        assert_eq!(stats.ranking, "12345");

        assert_eq!(view.medium.items.len(), 1);
        assert_eq!(view.medium.items[0].reading_time, "1 min read");
        assert_eq!(view.medium.items[0].published, "Mar 5, 2024");
    }

    #[tokio::test]
    async fn mount_survives_remote_load_failure() {
        let fixture = Fixture::new(StubStore {
            fail_load: true,
            ..Default::default()
        });
        let hub = fixture.hub();

        let tickets = hub.mount().await.unwrap();

        assert!(tickets.is_empty());
        let view = hub.view().await;
        assert!(view.mounted);
        assert_eq!(
            view.profile_error.as_deref(),
            Some("Remote store error: 503 Service Unavailable")
        );
    }

    #[tokio::test]
    async fn mount_after_session_end_is_an_auth_error() {
        let fixture = Fixture::new(StubStore::default());
        let hub = fixture.hub();
        hub.session().end();

        let result = hub.mount().await;

        assert_eq!(result.unwrap_err(), HubError::Auth(AuthError::NoActiveSession));
        assert!(hub.begin_edit().await.is_err());
    }

    #[tokio::test]
    async fn mount_activates_embed_for_linked_twitter() {
        let mut profile = LinkedProfile::default();
        profile.set(ProfileField::TwitterUrl, "https://x.com/someone");
        let fixture = Fixture::new(StubStore::with_profile(profile));
        let hub = fixture.hub();

        hub.mount().await.unwrap();

        let embed = hub.view().await.twitter.unwrap();
        assert_eq!(embed.timeline_url, "https://x.com/someone");
        assert_eq!(embed.height, 400);
        assert_eq!(fixture.embeds.activations.load(Ordering::SeqCst), 1);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Sections
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn missing_leetcode_user_shows_connect_prompt() {
        let mut fixture = Fixture::new(StubStore::with_profile(linked_profile()));
        fixture.stats = Arc::new(StubStats {
            unknown_user: true,
            ..Default::default()
        });
        let hub = fixture.hub();

        let tickets = hub.mount().await.unwrap();
        hub.run_all(tickets).await;

        let view = hub.view().await;
        assert_eq!(view.leetcode.status, SectionStatus::Loaded);
        assert!(view.leetcode.items.is_none());
        assert!(view.leetcode.error.is_none());
        assert_eq!(view.leetcode.empty_text, Some(CONNECT_LEETCODE));
    }

    #[tokio::test]
    async fn one_failing_section_leaves_others_alone() {
        let mut fixture = Fixture::new(StubStore::with_profile(linked_profile()));
        fixture.repos = Arc::new(StubRepos {
            fail: true,
            ..Default::default()
        });
        let hub = fixture.hub();

        let tickets = hub.mount().await.unwrap();
        hub.run_all(tickets).await;

        let view = hub.view().await;
        assert_eq!(view.github.status, SectionStatus::Failed);
        assert_eq!(view.github.error.as_deref(), Some("Failed to fetch repos"));
        assert!(view.github.items.is_empty());
        assert_eq!(view.leetcode.status, SectionStatus::Loaded);
        assert_eq!(view.medium.status, SectionStatus::Loaded);
        assert_eq!(view.medium.items.len(), 1);
    }

    #[tokio::test]
    async fn unusable_medium_handle_is_suppressed_not_failed() {
        let mut profile = LinkedProfile::default();
        profile.set(ProfileField::MediumUrl, "https://medium.com");
        let fixture = Fixture::new(StubStore::with_profile(profile));
        let hub = fixture.hub();

        let tickets = hub.mount().await.unwrap();
        hub.run_all(tickets).await;

        let view = hub.view().await;
        assert_eq!(view.medium.status, SectionStatus::Idle);
        assert!(view.medium.error.is_none());
        assert_eq!(view.medium.empty_text, Some(NO_ARTICLES));
    }

    #[tokio::test]
    async fn stale_github_response_is_discarded() {
        let gate = Arc::new(Notify::new());
        let mut fixture = Fixture::new(StubStore::default());
        fixture.repos = Arc::new(StubRepos {
            gate: Some(("old".to_string(), gate.clone())),
            ..Default::default()
        });
        let hub = fixture.hub();
        hub.mount().await.unwrap();
        hub.begin_edit().await.unwrap();

        let old = hub
            .set_field(ProfileField::GithubUsername, "old")
            .await
            .unwrap()
            .unwrap();
        let slow = tokio::spawn({
            let hub = hub.clone();
            async move { hub.run(old).await }
        });

        let new = hub
            .set_field(ProfileField::GithubUsername, "new")
            .await
            .unwrap()
            .unwrap();
        hub.run(new).await;

        gate.notify_one();
        slow.await.unwrap();

        let view = hub.view().await;
        assert_eq!(view.github.status, SectionStatus::Loaded);
        let names: Vec<_> = view.github.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["new-repo"]);
    }

    #[tokio::test]
    async fn clearing_a_handle_goes_idle_without_fetching() {
        let fixture = Fixture::new(StubStore::with_profile(linked_profile()));
        let hub = fixture.hub();
        let tickets = hub.mount().await.unwrap();
        hub.run_all(tickets).await;
        let calls_before = fixture.network_calls();

        hub.begin_edit().await.unwrap();
        let ticket = hub.set_field(ProfileField::GithubUsername, "").await.unwrap();

        assert!(ticket.is_none());
        assert_eq!(fixture.network_calls(), calls_before);
        let view = hub.view().await;
        assert_eq!(view.github.status, SectionStatus::Idle);
        assert!(view.github.items.is_empty());
    }

    #[tokio::test]
    async fn refresh_all_refetches_linked_sections() {
        let fixture = Fixture::new(StubStore::with_profile(linked_profile()));
        let hub = fixture.hub();
        hub.mount().await.unwrap();

        hub.refresh_all().await;

        assert_eq!(fixture.network_calls(), 3);
        assert_eq!(hub.view().await.github.status, SectionStatus::Loaded);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Editing
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn set_field_requires_edit_mode() {
        let fixture = Fixture::new(StubStore::default());
        let hub = fixture.hub();
        hub.mount().await.unwrap();

        let result = hub.set_field(ProfileField::KaggleUrl, "https://kaggle.com/me").await;

        assert_eq!(result.unwrap_err(), HubError::NotEditing);
    }

    #[tokio::test]
    async fn non_section_field_returns_no_ticket() {
        let fixture = Fixture::new(StubStore::default());
        let hub = fixture.hub();
        hub.mount().await.unwrap();
        hub.begin_edit().await.unwrap();

        let ticket = hub
            .set_field(ProfileField::LinkedinUrl, "https://linkedin.com/in/me")
            .await
            .unwrap();

        assert!(ticket.is_none());
        assert_eq!(
            hub.profile().await.get(ProfileField::LinkedinUrl),
            "https://linkedin.com/in/me"
        );
    }

    #[tokio::test]
    async fn twitter_change_rescans_embed() {
        let fixture = Fixture::new(StubStore::default());
        let hub = fixture.hub();
        hub.mount().await.unwrap();
        hub.begin_edit().await.unwrap();

        hub.set_field(ProfileField::TwitterUrl, "https://x.com/a").await.unwrap();
        hub.set_field(ProfileField::TwitterUrl, "https://x.com/b").await.unwrap();

        assert_eq!(fixture.embeds.activations.load(Ordering::SeqCst), 2);
        assert_eq!(hub.view().await.twitter.unwrap().timeline_url, "https://x.com/b");

        hub.set_field(ProfileField::TwitterUrl, "").await.unwrap();
        assert!(hub.view().await.twitter.is_none());
    }

    #[tokio::test]
    async fn save_persists_and_leaves_edit_mode() {
        let fixture = Fixture::new(StubStore::default());
        let hub = fixture.hub();
        hub.mount().await.unwrap();
        hub.begin_edit().await.unwrap();
        hub.set_field(ProfileField::GithubUsername, "octocat").await.unwrap();

        let tickets = hub.save().await.unwrap();

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].section, HubSection::Github);
        let saves = fixture.store.saves.lock().unwrap().clone();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].get(ProfileField::GithubUsername), "octocat");
        let view = hub.view().await;
        assert!(!view.editing);
        assert!(!view.saving);
    }

    #[tokio::test]
    async fn failed_save_keeps_edits_and_edit_mode() {
        let fixture = Fixture::new(StubStore {
            fail_save: true,
            ..Default::default()
        });
        let hub = fixture.hub();
        hub.mount().await.unwrap();
        hub.begin_edit().await.unwrap();
        hub.set_field(ProfileField::KaggleUrl, "https://kaggle.com/me").await.unwrap();

        let result = hub.save().await;

        assert_eq!(
            result.unwrap_err(),
            HubError::Remote("500 Internal Server Error".to_string())
        );
        let view = hub.view().await;
        assert!(view.editing);
        assert!(!view.saving);
        assert_eq!(hub.profile().await.get(ProfileField::KaggleUrl), "https://kaggle.com/me");
    }

    #[tokio::test]
    async fn save_outside_edit_mode_is_rejected() {
        let fixture = Fixture::new(StubStore::default());
        let hub = fixture.hub();
        hub.mount().await.unwrap();

        assert_eq!(hub.save().await.unwrap_err(), HubError::NotEditing);
    }

    #[tokio::test]
    async fn overlapping_save_is_rejected() {
        let gate = Arc::new(Notify::new());
        let fixture = Fixture::new(StubStore {
            save_gate: Some(gate.clone()),
            ..Default::default()
        });
        let hub = fixture.hub();
        hub.mount().await.unwrap();
        hub.begin_edit().await.unwrap();

        let first = tokio::spawn({
            let hub = hub.clone();
            async move { hub.save().await }
        });
        while !hub.view().await.saving {
            tokio::task::yield_now().await;
        }

        assert_eq!(hub.save().await.unwrap_err(), HubError::SaveInProgress);

        gate.notify_one();
        assert!(first.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn fields_are_locked_while_saving() {
        let gate = Arc::new(Notify::new());
        let fixture = Fixture::new(StubStore {
            save_gate: Some(gate.clone()),
            ..Default::default()
        });
        let hub = fixture.hub();
        hub.mount().await.unwrap();
        hub.begin_edit().await.unwrap();
        hub.set_field(ProfileField::GithubUsername, "first").await.unwrap();

        let pending = tokio::spawn({
            let hub = hub.clone();
            async move { hub.save().await }
        });
        while !hub.view().await.saving {
            tokio::task::yield_now().await;
        }

        let during = hub.set_field(ProfileField::GithubUsername, "second").await;
        assert_eq!(during.unwrap_err(), HubError::SaveInProgress);

        gate.notify_one();
        assert!(pending.await.unwrap().is_ok());

        let view = hub.view().await;
        assert!(!view.editing);
        let persisted = fixture.store.stored.lock().unwrap().clone().unwrap();
        assert_eq!(persisted.get(ProfileField::GithubUsername), "first");
        assert_eq!(hub.profile().await, persisted);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Unmount
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unmount_discards_derived_state_and_in_flight_results() {
        let fixture = Fixture::new(StubStore::with_profile(linked_profile()));
        let hub = fixture.hub();
        let tickets = hub.mount().await.unwrap();

        hub.unmount().await;
        hub.run_all(tickets).await;

        let view = hub.view().await;
        assert!(!view.mounted);
        assert_eq!(view.github.status, SectionStatus::Idle);
        assert!(view.github.items.is_empty());
        assert!(view.medium.items.is_empty());
        assert!(view.fields.iter().all(|f| f.value.is_empty()));
    }
}
