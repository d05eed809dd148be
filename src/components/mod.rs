//! Panel UI components.
//!
//! Element ids (`camera-feed`, `startBtn`, `currentMode`, `smoothing`, ...) and the
//! `gesture-card` class are the contract with the backend's stylesheet and
//! must not change.

pub mod camera_feed;
pub mod connection_badge;
pub mod controls;
pub mod gesture_grid;
pub mod settings_panel;
pub mod status_section;
