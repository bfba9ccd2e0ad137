//! Hosted backend configuration (table store + auth service)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use url::Url;

use super::error::ValidationError;
use super::server::Environment;

/// Hosted backend-as-a-service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Project base URL; REST lives under `/rest/v1`, auth under `/auth/v1`
    pub url: String,

    /// Public (anon) API key sent as the `apikey` header
    pub anon_key: Secret<String>,

    /// Table holding linked profiles
    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,
}

impl BackendConfig {
    /// Creates a configuration for the given project URL and key.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: Secret::new(anon_key.into()),
            profiles_table: default_profiles_table(),
        }
    }

    /// Exposes the anon key (for making requests).
    pub fn anon_key(&self) -> &str {
        self.anon_key.expose_secret()
    }

    /// Base URL for table requests.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    /// Base URL for auth requests.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.url.trim_end_matches('/'))
    }

    /// Validate backend configuration
    ///
    /// In production, requires HTTPS for the project URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__URL"));
        }
        if self.anon_key().is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__ANON_KEY"));
        }
        if self.profiles_table.is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__PROFILES_TABLE"));
        }
        Url::parse(&self.url).map_err(|_| ValidationError::InvalidUrl("backend.url"))?;

        if *environment == Environment::Production && !self.url.starts_with("https://") {
            return Err(ValidationError::BackendMustBeHttps);
        }

        Ok(())
    }
}

fn default_profiles_table() -> String {
    "profiles".to_string()
}
