//! In-memory ProfileStore for tests and local development.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{SessionContext, UserId};
use crate::domain::hub::LinkedProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Profiles keyed by user id. Last save wins.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, LinkedProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a stored profile.
    pub fn with_profile(self, user_id: &UserId, profile: LinkedProfile) -> Self {
        self.profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id.as_str().to_string(), profile);
        self
    }

    pub fn get(&self, user_id: &UserId) -> Option<LinkedProfile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id.as_str())
            .cloned()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self, ctx: &SessionContext) -> Result<Option<LinkedProfile>, ProfileStoreError> {
        let session = ctx.current()?;
        Ok(self.get(&session.user.id))
    }

    async fn save(
        &self,
        ctx: &SessionContext,
        profile: &LinkedProfile,
    ) -> Result<(), ProfileStoreError> {
        let session = ctx.current()?;
        self.profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.user.id.as_str().to_string(), profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthError, AuthenticatedUser, Session};
    use crate::domain::hub::ProfileField;

    fn context(user_id: &str) -> SessionContext {
        let user = AuthenticatedUser::new(UserId::new(user_id).unwrap(), "me@example.com");
        SessionContext::start(Session::new(user, "token"))
    }

    #[tokio::test]
    async fn load_returns_none_before_first_save() {
        let store = InMemoryProfileStore::new();

        assert_eq!(store.load(&context("user-1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_creates_then_overwrites() {
        let store = InMemoryProfileStore::new();
        let ctx = context("user-1");
        let mut profile = LinkedProfile::default();
        profile.set(ProfileField::GithubUsername, "octocat");
        store.save(&ctx, &profile).await.unwrap();

        profile.set(ProfileField::GithubUsername, "hubot");
        store.save(&ctx, &profile).await.unwrap();

        let loaded = store.load(&ctx).await.unwrap().unwrap();
        assert_eq!(loaded.get(ProfileField::GithubUsername), "hubot");
    }

    #[tokio::test]
    async fn profiles_are_scoped_per_user() {
        let mut profile = LinkedProfile::default();
        profile.set(ProfileField::LeetcodeUsername, "lc");
        let store =
            InMemoryProfileStore::new().with_profile(&UserId::new("user-1").unwrap(), profile);

        assert!(store.load(&context("user-1")).await.unwrap().is_some());
        assert!(store.load(&context("user-2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ended_session_is_an_auth_error() {
        let store = InMemoryProfileStore::new();
        let ctx = context("user-1");
        ctx.end();

        let result = store.save(&ctx, &LinkedProfile::default()).await;

        assert_eq!(
            result.unwrap_err(),
            ProfileStoreError::Auth(AuthError::NoActiveSession)
        );
    }
}
