//! Root application component.

use leptos::html;
use leptos::prelude::*;

use crate::components::camera_feed::CameraFeed;
use crate::components::controls::Controls;
use crate::components::gesture_grid::GestureGrid;
use crate::components::settings_panel::SettingsPanel;
use crate::components::status_section::StatusSection;
use crate::config::PanelConfig;
use crate::state::panel::PanelState;
#[cfg(feature = "csr")]
use crate::state::shortcuts::{Shortcut, shortcut_for_key};

/// Click the button a shortcut stands for. A disabled button ignores it.
#[cfg(feature = "csr")]
fn press_shortcut(key: &str, stop_ref: NodeRef<html::Button>, minimize_ref: NodeRef<html::Button>) {
    let target = match shortcut_for_key(key) {
        Some(Shortcut::Stop) => stop_ref,
        Some(Shortcut::Minimize) => minimize_ref,
        None => return,
    };
    if let Some(button) = target.get_untracked() {
        button.click();
    }
}

/// Root component.
///
/// Provides the panel state, opens the status feed, and installs the global
/// keyboard shortcuts.
#[component]
pub fn App(config: PanelConfig) -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    provide_context(panel);

    let stop_ref = NodeRef::<html::Button>::new();
    let minimize_ref = NodeRef::<html::Button>::new();

    #[cfg(feature = "csr")]
    {
        crate::net::status_feed::spawn_status_feed(&config, panel);
        let _ = window_event_listener(leptos::ev::keydown, move |ev| {
            press_shortcut(&ev.key(), stop_ref, minimize_ref);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    view! {
        <div class="container">
            <header>
                <div class="logo">
                    <i class="fas fa-hand-paper fa-2x"></i>
                    <h1>"VisioSense"</h1>
                </div>
                <p class="subtitle">"ADVANCED HAND GESTURE CONTROL SYSTEM"</p>
            </header>
            <div class="main-content">
                <div class="camera-section">
                    <CameraFeed/>
                    <Controls stop_ref minimize_ref/>
                </div>
                <div class="status-panel">
                    <StatusSection/>
                    <SettingsPanel/>
                </div>
            </div>
            <GestureGrid/>
        </div>
    }
}
