//! EmbedLoader port - one-time initialization of a third-party embed script.

/// What an activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedActivation {
    /// First activation: the script is being loaded.
    Loaded,
    /// Already loaded: existing embed markers are re-scanned.
    Rescanned,
}

/// Idempotent embed script loader.
///
/// The first `activate` loads the script; every later call only asks it to
/// re-scan for embed markers. Safe to call from many hubs concurrently.
pub trait EmbedLoader: Send + Sync {
    fn activate(&self) -> EmbedActivation;

    /// Script URL clients include to render the embed.
    fn script_src(&self) -> &str;

    /// Rendered timeline height in pixels.
    fn height(&self) -> u32;
}
