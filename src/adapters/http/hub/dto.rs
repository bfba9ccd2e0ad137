//! HTTP DTOs for hub endpoints.
//!
//! Responses reuse [`HubView`](crate::application::hub::HubView), which is
//! already a display model; only requests need their own shapes.

use serde::Deserialize;

/// New value for one profile field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFieldRequest {
    #[serde(default)]
    pub value: String,
}
