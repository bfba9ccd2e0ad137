//! Embed adapters.

mod twitter;

pub use twitter::TwitterWidgets;
