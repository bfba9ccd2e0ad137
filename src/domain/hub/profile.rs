//! Linked external-account handles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::HubSection;

/// The user's linked external accounts, stored as one flat record.
///
/// Field names match the columns of the remote `profiles` table. Every field
/// is optional; an empty string is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedProfile {
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub medium_url: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub kaggle_url: Option<String>,
    #[serde(default)]
    pub leetcode_username: Option<String>,
    #[serde(default)]
    pub hackerrank_username: Option<String>,
}

/// One editable field of a [`LinkedProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    LinkedinUrl,
    TwitterUrl,
    MediumUrl,
    GithubUsername,
    KaggleUrl,
    LeetcodeUsername,
    HackerrankUsername,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::LinkedinUrl,
        ProfileField::TwitterUrl,
        ProfileField::MediumUrl,
        ProfileField::GithubUsername,
        ProfileField::KaggleUrl,
        ProfileField::LeetcodeUsername,
        ProfileField::HackerrankUsername,
    ];

    /// Column name in the `profiles` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::LinkedinUrl => "linkedin_url",
            ProfileField::TwitterUrl => "twitter_url",
            ProfileField::MediumUrl => "medium_url",
            ProfileField::GithubUsername => "github_username",
            ProfileField::KaggleUrl => "kaggle_url",
            ProfileField::LeetcodeUsername => "leetcode_username",
            ProfileField::HackerrankUsername => "hackerrank_username",
        }
    }

    /// Human label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::LinkedinUrl => "LinkedIn URL",
            ProfileField::TwitterUrl => "Twitter URL",
            ProfileField::MediumUrl => "Medium URL",
            ProfileField::GithubUsername => "GitHub Username",
            ProfileField::KaggleUrl => "Kaggle URL",
            ProfileField::LeetcodeUsername => "LeetCode Username",
            ProfileField::HackerrankUsername => "HackerRank Username",
        }
    }

    /// The hub section fed by this field, if any.
    pub fn section(&self) -> Option<HubSection> {
        match self {
            ProfileField::GithubUsername => Some(HubSection::Github),
            ProfileField::LeetcodeUsername => Some(HubSection::Leetcode),
            ProfileField::MediumUrl => Some(HubSection::Medium),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("field", format!("unknown profile field '{}'", s))
            })
    }
}

impl LinkedProfile {
    fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::LinkedinUrl => &self.linkedin_url,
            ProfileField::TwitterUrl => &self.twitter_url,
            ProfileField::MediumUrl => &self.medium_url,
            ProfileField::GithubUsername => &self.github_username,
            ProfileField::KaggleUrl => &self.kaggle_url,
            ProfileField::LeetcodeUsername => &self.leetcode_username,
            ProfileField::HackerrankUsername => &self.hackerrank_username,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::LinkedinUrl => &mut self.linkedin_url,
            ProfileField::TwitterUrl => &mut self.twitter_url,
            ProfileField::MediumUrl => &mut self.medium_url,
            ProfileField::GithubUsername => &mut self.github_username,
            ProfileField::KaggleUrl => &mut self.kaggle_url,
            ProfileField::LeetcodeUsername => &mut self.leetcode_username,
            ProfileField::HackerrankUsername => &mut self.hackerrank_username,
        }
    }

    /// Current value of a field, empty when unset.
    pub fn get(&self, field: ProfileField) -> &str {
        self.slot(field).as_deref().unwrap_or("")
    }

    /// Sets a field. Returns true if the stored value changed.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        let value = value.into();
        let next = if value.is_empty() { None } else { Some(value) };
        let slot = self.slot_mut(field);
        if *slot == next {
            return false;
        }
        *slot = next;
        true
    }

    /// Handle feeding a hub section.
    pub fn handle_for(&self, section: HubSection) -> &str {
        self.get(section.field())
    }
}
