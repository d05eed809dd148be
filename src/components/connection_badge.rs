use leptos::prelude::*;

use crate::state::panel::{ConnectionStatus, PanelState};

/// Small dot + label for the status socket.
#[component]
pub fn ConnectionBadge() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    let status_class = move || match panel.with(|p| p.connection) {
        ConnectionStatus::Connected => "connection-badge connection-badge--connected",
        ConnectionStatus::Connecting => "connection-badge connection-badge--connecting",
        ConnectionStatus::Reconnecting => "connection-badge connection-badge--reconnecting",
    };

    let status_label = move || match panel.with(|p| p.connection) {
        ConnectionStatus::Connected => "Live",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Reconnecting => "Reconnecting...",
    };

    view! {
        <span class=status_class>
            <span class="connection-badge__dot"></span>
            {status_label}
        </span>
    }
}
