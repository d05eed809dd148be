//! Smoothing / sensitivity sliders and the drawing toggle.
//!
//! Each control sends its own single-field patch on every event. Slider
//! values go out as the raw string the range input reports.

use leptos::prelude::*;

use crate::net::commands::{Command, spawn_command};
use crate::net::types::SettingsPatch;
use crate::state::panel::{INITIAL_SENSITIVITY, INITIAL_SMOOTHING, PanelState};

fn send_patch(panel: RwSignal<PanelState>, patch: SettingsPatch) {
    panel.update(|p| p.apply_local_setting(&patch));
    spawn_command(panel, Command::UpdateSettings(patch));
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    let on_smoothing = move |ev: leptos::ev::Event| {
        send_patch(panel, SettingsPatch::Smoothing(event_target_value(&ev)));
    };
    let on_sensitivity = move |ev: leptos::ev::Event| {
        send_patch(panel, SettingsPatch::Sensitivity(event_target_value(&ev)));
    };
    let on_drawing = move |ev: leptos::ev::Event| {
        send_patch(panel, SettingsPatch::DrawingEnabled(event_target_checked(&ev)));
    };

    let smoothing = move || panel.with(|p| p.smoothing.clone());
    let sensitivity = move || panel.with(|p| p.sensitivity.clone());

    view! {
        <div class="settings-panel">
            <h2>
                <i class="fas fa-sliders"></i>
                " Settings"
            </h2>
            <div class="slider-container">
                <label for="smoothing">"Cursor Smoothing " <span class="slider-value">{smoothing}</span></label>
                <input
                    type="range"
                    id="smoothing"
                    min="0"
                    max="100"
                    value=INITIAL_SMOOTHING
                    on:input=on_smoothing
                />
            </div>
            <div class="slider-container">
                <label for="sensitivity">"Gesture Sensitivity " <span class="slider-value">{sensitivity}</span></label>
                <input
                    type="range"
                    id="sensitivity"
                    min="0"
                    max="100"
                    value=INITIAL_SENSITIVITY
                    on:input=on_sensitivity
                />
            </div>
            <div class="checkbox-container">
                <input type="checkbox" id="drawingEnabled" checked=true on:change=on_drawing/>
                <label for="drawingEnabled">"Enable Drawing Mode"</label>
            </div>
        </div>
    }
}
