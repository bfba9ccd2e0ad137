//! PostgREST adapter for ProfileStore.
//!
//! Reads and upserts the signed-in user's row in the backend's profiles
//! table. Requests authenticate with the project's anon key (`apikey`) plus
//! the user's access token, so row-level security scopes every call to the
//! caller's own row.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::config::BackendConfig;
use crate::domain::foundation::{Session, SessionContext};
use crate::domain::hub::LinkedProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Row shape written on save.
#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    id: &'a str,
    #[serde(flatten)]
    profile: &'a LinkedProfile,
}

/// Profile store backed by the hosted table API.
pub struct RemoteProfileStore {
    table_url: String,
    anon_key: Secret<String>,
    http_client: reqwest::Client,
}

impl RemoteProfileStore {
    pub fn new(config: &BackendConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            table_url: format!("{}/{}", config.rest_url(), config.profiles_table),
            anon_key: config.anon_key.clone(),
            http_client,
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder, session: &Session) -> reqwest::RequestBuilder {
        request
            .header("apikey", self.anon_key.expose_secret())
            .bearer_auth(session.access_token())
    }
}

fn remote(context: &str, err: impl std::fmt::Display) -> ProfileStoreError {
    tracing::error!("{}: {}", context, err);
    ProfileStoreError::remote(format!("{}: {}", context, err))
}

#[async_trait]
impl ProfileStore for RemoteProfileStore {
    async fn load(&self, ctx: &SessionContext) -> Result<Option<LinkedProfile>, ProfileStoreError> {
        let session = ctx.current()?;
        let user_id = session.user.id.as_str();
        tracing::debug!(%user_id, "Loading linked profile");

        let request = self
            .http_client
            .get(&self.table_url)
            .query(&[("id", format!("eq.{}", user_id)), ("select", "*".to_string())]);

        let response = self
            .authorized(request, &session)
            .send()
            .await
            .map_err(|e| remote("Profile request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(remote("Profile store returned", status));
        }

        let rows: Vec<LinkedProfile> = response
            .json()
            .await
            .map_err(|e| remote("Failed to parse profile rows", e))?;

        Ok(rows.into_iter().next())
    }

    async fn save(
        &self,
        ctx: &SessionContext,
        profile: &LinkedProfile,
    ) -> Result<(), ProfileStoreError> {
        let session = ctx.current()?;
        let user_id = session.user.id.as_str();
        tracing::debug!(%user_id, "Saving linked profile");

        let request = self
            .http_client
            .post(&self.table_url)
            .query(&[("on_conflict", "id")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(&ProfileRow {
                id: user_id,
                profile,
            });

        let response = self
            .authorized(request, &session)
            .send()
            .await
            .map_err(|e| remote("Profile save failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(remote("Profile store returned", status));
        }
        Ok(())
    }
}

impl std::fmt::Debug for RemoteProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteProfileStore")
            .field("table_url", &self.table_url)
            .finish_non_exhaustive()
    }
}
