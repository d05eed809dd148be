//! Wire types for the status feed and the settings endpoint.
//!
//! DESIGN
//! ======
//! Status messages are decoded strictly: a frame missing any of the three
//! fields is rejected instead of half-applied. Settings patches are an enum
//! so a request body can only ever carry one field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One status message pushed by the backend over `/ws`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatusUpdate {
    pub mode: String,
    pub gesture: String,
    pub fingers: i64,
}

/// Single-field settings update sent to `/update-settings`.
///
/// Serializes as a one-key object, e.g. `{"smoothing":"40"}`. Slider values
/// are kept as the raw string the range input reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SettingsPatch {
    #[serde(rename = "smoothing")]
    Smoothing(String),
    #[serde(rename = "sensitivity")]
    Sensitivity(String),
    #[serde(rename = "drawingEnabled")]
    DrawingEnabled(bool),
}
