//! Per-section fetch state for the Professional Hub.
//!
//! Each adapter-backed section runs the lifecycle
//! `Idle -> Loading -> {Loaded | Failed}` and re-enters `Loading` whenever
//! its handle changes. Fetches are never cancelled; instead every call to
//! [`Section::begin`] bumps a generation counter and hands out a
//! [`FetchTicket`]. A result is only committed while its ticket is still the
//! latest one, so a slow response for an old handle cannot overwrite the
//! results for a newer one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

use super::ProfileField;

/// Adapter-backed sections of the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubSection {
    Github,
    Leetcode,
    Medium,
}

impl HubSection {
    pub const ALL: [HubSection; 3] = [HubSection::Github, HubSection::Leetcode, HubSection::Medium];

    /// Profile field holding this section's handle.
    pub fn field(&self) -> ProfileField {
        match self {
            HubSection::Github => ProfileField::GithubUsername,
            HubSection::Leetcode => ProfileField::LeetcodeUsername,
            HubSection::Medium => ProfileField::MediumUrl,
        }
    }
}

impl fmt::Display for HubSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HubSection::Github => "github",
            HubSection::Leetcode => "leetcode",
            HubSection::Medium => "medium",
        };
        f.write_str(s)
    }
}

/// Fetch status of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl StateMachine for SectionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SectionStatus::*;
        matches!(
            (self, target),
            (_, Idle) | (_, Loading) | (Loading, Loaded) | (Loading, Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SectionStatus::*;
        match self {
            Loading => vec![Idle, Loading, Loaded, Failed],
            Idle | Loaded | Failed => vec![Idle, Loading],
        }
    }
}

/// Proof that a fetch was requested for a specific handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub section: HubSection,
    pub handle: String,
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Render state for one section.
#[derive(Debug, Clone, Default)]
pub struct Section<T> {
    status: SectionStatus,
    data: T,
    error: Option<String>,
    generation: u64,
}

impl<T: Default> Section<T> {
    pub fn status(&self) -> SectionStatus {
        self.status
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Inline error text for `Failed` sections.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a fetch cycle for `handle`.
    ///
    /// Results of any earlier cycle are cleared. An empty handle moves the
    /// section straight to `Idle` and returns `None`: nothing is fetched.
    pub fn begin(&mut self, section: HubSection, handle: &str) -> Option<FetchTicket> {
        self.generation += 1;
        self.data = T::default();
        self.error = None;

        if handle.is_empty() {
            self.status = SectionStatus::Idle;
            return None;
        }

        self.status = SectionStatus::Loading;
        Some(FetchTicket {
            section,
            handle: handle.to_string(),
            generation: self.generation,
        })
    }

    /// Commits fetched data. Returns false if the ticket is stale.
    pub fn complete(&mut self, ticket: &FetchTicket, data: T) -> bool {
        if !self.accepts(ticket, SectionStatus::Loaded) {
            return false;
        }
        self.status = SectionStatus::Loaded;
        self.data = data;
        true
    }

    /// Records a failure message. Returns false if the ticket is stale.
    pub fn fail(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> bool {
        if !self.accepts(ticket, SectionStatus::Failed) {
            return false;
        }
        self.status = SectionStatus::Failed;
        self.error = Some(message.into());
        true
    }

    /// Drops back to `Idle` without an error (suppressed fetch).
    pub fn suppress(&mut self, ticket: &FetchTicket) -> bool {
        if !self.accepts(ticket, SectionStatus::Idle) {
            return false;
        }
        self.status = SectionStatus::Idle;
        true
    }

    /// Forgets everything, invalidating outstanding tickets.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.status = SectionStatus::Idle;
        self.data = T::default();
        self.error = None;
    }

    fn accepts(&self, ticket: &FetchTicket, target: SectionStatus) -> bool {
        ticket.generation == self.generation
            && self.status == SectionStatus::Loading
            && self.status.can_transition_to(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_with_handle_enters_loading() {
        let mut section: Section<Vec<u32>> = Section::default();
        let ticket = section.begin(HubSection::Github, "octocat").unwrap();

        assert_eq!(section.status(), SectionStatus::Loading);
        assert_eq!(ticket.handle, "octocat");
        assert_eq!(ticket.section, HubSection::Github);
    }

    #[test]
    fn begin_with_empty_handle_goes_idle_and_clears() {
        let mut section: Section<Vec<u32>> = Section::default();
        let ticket = section.begin(HubSection::Github, "octocat").unwrap();
        section.complete(&ticket, vec![1, 2]);

        assert!(section.begin(HubSection::Github, "").is_none());
        assert_eq!(section.status(), SectionStatus::Idle);
        assert!(section.data().is_empty());
    }

    #[test]
    fn complete_commits_latest_ticket() {
        let mut section: Section<Vec<u32>> = Section::default();
        let ticket = section.begin(HubSection::Github, "octocat").unwrap();

        assert!(section.complete(&ticket, vec![7]));
        assert_eq!(section.status(), SectionStatus::Loaded);
        assert_eq!(section.data(), &vec![7]);
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut section: Section<Vec<&str>> = Section::default();
        let old = section.begin(HubSection::Github, "old").unwrap();
        let new = section.begin(HubSection::Github, "new").unwrap();

        assert!(section.complete(&new, vec!["new-repo"]));
        assert!(!section.complete(&old, vec!["old-repo"]));
        assert!(!section.fail(&old, "boom"));
        assert_eq!(section.data(), &vec!["new-repo"]);
        assert_eq!(section.error(), None);
    }

    #[test]
    fn ticket_cannot_commit_twice() {
        let mut section: Section<Vec<u32>> = Section::default();
        let ticket = section.begin(HubSection::Medium, "@writer").unwrap();

        assert!(section.fail(&ticket, "Failed to fetch Medium articles"));
        assert!(!section.complete(&ticket, vec![1]));
        assert_eq!(section.status(), SectionStatus::Failed);
        assert_eq!(section.error(), Some("Failed to fetch Medium articles"));
    }

    #[test]
    fn suppress_returns_to_idle_without_error() {
        let mut section: Section<Vec<u32>> = Section::default();
        let ticket = section.begin(HubSection::Medium, "https://medium.com").unwrap();

        assert!(section.suppress(&ticket));
        assert_eq!(section.status(), SectionStatus::Idle);
        assert_eq!(section.error(), None);
    }

    #[test]
    fn clear_invalidates_outstanding_tickets() {
        let mut section: Section<Option<u32>> = Section::default();
        let ticket = section.begin(HubSection::Leetcode, "lc").unwrap();
        section.clear();

        assert!(!section.complete(&ticket, Some(3)));
        assert_eq!(section.status(), SectionStatus::Idle);
    }

    #[test]
    fn section_status_transitions() {
        use SectionStatus::*;
        assert!(Idle.can_transition_to(&Loading));
        assert!(Loading.can_transition_to(&Loaded));
        assert!(Loading.can_transition_to(&Failed));
        assert!(Loaded.can_transition_to(&Loading));
        assert!(!Idle.can_transition_to(&Loaded));
        assert!(!Failed.can_transition_to(&Loaded));
        assert!(!Loaded.is_terminal());
        for status in [Idle, Loading, Loaded, Failed] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }
}
