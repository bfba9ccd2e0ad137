//! Embed configuration

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Twitter timeline embed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedConfig {
    /// Widgets script URL
    #[serde(default = "default_twitter_widgets_src")]
    pub twitter_widgets_src: String,

    /// Timeline height in pixels
    #[serde(default = "default_timeline_height")]
    pub timeline_height: u32,
}

impl EmbedConfig {
    /// Validate embed configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        Url::parse(&self.twitter_widgets_src)
            .map_err(|_| ValidationError::InvalidUrl("embed.twitter_widgets_src"))?;
        if self.timeline_height == 0 {
            return Err(ValidationError::InvalidEmbedHeight);
        }
        Ok(())
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            twitter_widgets_src: default_twitter_widgets_src(),
            timeline_height: default_timeline_height(),
        }
    }
}

fn default_twitter_widgets_src() -> String {
    "https://platform.twitter.com/widgets.js".to_string()
}

fn default_timeline_height() -> u32 {
    400
}
