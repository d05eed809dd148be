//! Panel state: the single model every component reads and writes.
//!
//! Only the status feed and the panel controls write to it.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::api::VIDEO_FEED_PATH;
use crate::net::commands::PanelEffect;
use crate::net::types::{SettingsPatch, StatusUpdate};
use crate::state::gestures::{self, GESTURE_CARDS};

pub const INITIAL_MODE: &str = "Mouse Mode";
pub const INITIAL_GESTURE: &str = "No Gesture";
pub const INITIAL_SMOOTHING: &str = "40";
pub const INITIAL_SENSITIVITY: &str = "70";

/// Everything the panel displays, provided as `RwSignal<PanelState>` context.
///
/// Text fields hold exactly what the last status message carried. Start and
/// Stop are only flipped by a completed start/stop request, never by the
/// status feed, so they reflect the last command this tab issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelState {
    pub mode: String,
    pub mode_class: String,
    pub gesture: String,
    pub fingers: String,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub connection: ConnectionStatus,
    pub smoothing: String,
    pub sensitivity: String,
    pub drawing_enabled: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            mode: INITIAL_MODE.to_owned(),
            mode_class: String::new(),
            gesture: INITIAL_GESTURE.to_owned(),
            fingers: "0".to_owned(),
            start_enabled: true,
            stop_enabled: false,
            connection: ConnectionStatus::default(),
            smoothing: INITIAL_SMOOTHING.to_owned(),
            sensitivity: INITIAL_SENSITIVITY.to_owned(),
            drawing_enabled: true,
        }
    }
}

/// Status feed connection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Reconnecting,
}

/// CSS class for a mode label: lower-cased, first space replaced by `-`.
///
/// Only the first space is replaced, so `"Two Finger Scroll"` becomes
/// `"two-finger scroll"`.
pub fn mode_class(mode: &str) -> String {
    mode.to_lowercase().replacen(' ', "-", 1)
}

impl PanelState {
    /// Apply one status message from the feed.
    pub fn apply_status(&mut self, status: &StatusUpdate) {
        self.mode.clone_from(&status.mode);
        self.gesture.clone_from(&status.gesture);
        self.fingers = status.fingers.to_string();
        self.mode_class = mode_class(&status.mode);
    }

    /// Apply the local effect of a completed command.
    pub fn apply_effect(&mut self, effect: PanelEffect) {
        match effect {
            PanelEffect::CaptureStarted => {
                self.start_enabled = false;
                self.stop_enabled = true;
            }
            PanelEffect::CaptureStopped => {
                self.start_enabled = true;
                self.stop_enabled = false;
            }
        }
    }

    /// Mirror a settings control's value locally, independent of the request.
    pub fn apply_local_setting(&mut self, patch: &SettingsPatch) {
        match patch {
            SettingsPatch::Smoothing(value) => self.smoothing.clone_from(value),
            SettingsPatch::Sensitivity(value) => self.sensitivity.clone_from(value),
            SettingsPatch::DrawingEnabled(enabled) => self.drawing_enabled = *enabled,
        }
    }

    /// Highlight flag for each entry of [`GESTURE_CARDS`], in order.
    pub fn active_cards(&self) -> Vec<bool> {
        let headings: Vec<&str> = GESTURE_CARDS.iter().map(|card| card.name).collect();
        gestures::active_flags(&headings, &self.gesture)
    }

    /// Source of the camera image, shown while capture is running.
    ///
    /// Follows the Start/Stop buttons: set by a completed start, cleared by a
    /// completed stop.
    pub fn video_feed_src(&self) -> Option<&'static str> {
        self.stop_enabled.then_some(VIDEO_FEED_PATH)
    }
}
