//! Live status readout: mode, gesture, and finger count.

use leptos::prelude::*;

use crate::components::connection_badge::ConnectionBadge;
use crate::state::panel::PanelState;

/// Status block fed by the `/ws` socket.
///
/// The mode label carries the derived mode class so the stylesheet can color
/// it per mode (`mouse-mode`, `drawing-mode`, ...).
#[component]
pub fn StatusSection() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    let mode = move || panel.with(|p| p.mode.clone());
    let mode_class = move || panel.with(|p| p.mode_class.clone());
    let gesture = move || panel.with(|p| p.gesture.clone());
    let fingers = move || panel.with(|p| p.fingers.clone());

    view! {
        <div class="status-section">
            <h2>
                <i class="fas fa-info-circle"></i>
                " Status "
                <ConnectionBadge/>
            </h2>
            <div class="status-item">
                <div>"Mode: " <span id="currentMode" class=mode_class>{mode}</span></div>
            </div>
            <div class="status-item">
                <div>"Gesture: " <span id="currentGesture">{gesture}</span></div>
            </div>
            <div class="status-item">
                <div>"Fingers: " <span id="fingerCount">{fingers}</span></div>
            </div>
        </div>
    }
}
