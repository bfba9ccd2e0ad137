//! Twitter widgets loader - Implementation of EmbedLoader.
//!
//! The widgets script is loaded once per process. Later activations only ask
//! it to re-scan the page for `twitter-timeline` anchors.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::EmbedConfig;
use crate::ports::{EmbedActivation, EmbedLoader};

/// Process-wide Twitter widgets state.
#[derive(Debug)]
pub struct TwitterWidgets {
    script_src: String,
    height: u32,
    loaded: AtomicBool,
}

impl TwitterWidgets {
    pub fn new(script_src: impl Into<String>, height: u32) -> Self {
        Self {
            script_src: script_src.into(),
            height,
            loaded: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &EmbedConfig) -> Self {
        Self::new(config.twitter_widgets_src.clone(), config.timeline_height)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }
}

impl EmbedLoader for TwitterWidgets {
    fn activate(&self) -> EmbedActivation {
        if self.loaded.swap(true, Ordering::AcqRel) {
            EmbedActivation::Rescanned
        } else {
            tracing::info!(script = %self.script_src, "Loading Twitter widgets script");
            EmbedActivation::Loaded
        }
    }

    fn script_src(&self) -> &str {
        &self.script_src
    }

    fn height(&self) -> u32 {
        self.height
    }
}
