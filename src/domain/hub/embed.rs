//! Twitter timeline embed marker.

use serde::{Deserialize, Serialize};

/// What a client needs to render the embedded timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterEmbed {
    /// Profile URL the `twitter-timeline` anchor points at.
    pub timeline_url: String,
    /// Widgets script that turns the anchor into a timeline.
    pub script_src: String,
    /// Rendered height in pixels.
    pub height: u32,
}
