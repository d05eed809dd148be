//! Start / Stop / Minimize buttons.

use leptos::html;
use leptos::prelude::*;

use crate::net::commands::{Command, spawn_command};
use crate::state::panel::PanelState;
use crate::state::shortcuts::SHORTCUTS;

/// Capture control buttons.
///
/// `stop_ref` and `minimize_ref` are held by the app so keyboard shortcuts
/// can click the real elements.
#[component]
pub fn Controls(stop_ref: NodeRef<html::Button>, minimize_ref: NodeRef<html::Button>) -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    let start_disabled = move || panel.with(|p| !p.start_enabled);
    let stop_disabled = move || panel.with(|p| !p.stop_enabled);

    view! {
        <div class="controls">
            <button
                id="startBtn"
                class="btn btn-start"
                disabled=start_disabled
                on:click=move |_| spawn_command(panel, Command::Start)
            >
                <i class="fas fa-play"></i>
                " START"
            </button>
            <button
                id="stopBtn"
                class="btn btn-stop"
                node_ref=stop_ref
                disabled=stop_disabled
                on:click=move |_| spawn_command(panel, Command::Stop)
            >
                <i class="fas fa-stop"></i>
                " STOP"
            </button>
            <button
                id="minimizeBtn"
                class="btn btn-minimize"
                node_ref=minimize_ref
                on:click=move |_| spawn_command(panel, Command::Minimize)
            >
                <i class="fas fa-window-minimize"></i>
                " MINIMIZE"
            </button>
        </div>
        <div class="shortcut-hints">
            {SHORTCUTS
                .iter()
                .map(|s| {
                    view! {
                        <span class="shortcut-hints__item">
                            <kbd>{s.key_hint()}</kbd>
                            " "
                            {s.label()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
