//! Live camera image, present only while capture is running.

use leptos::prelude::*;

use crate::state::panel::PanelState;

#[component]
pub fn CameraFeed() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();
    let src = move || panel.with(PanelState::video_feed_src);

    view! {
        <div id="camera-feed">
            {move || src().map(|src| view! { <img src=src alt="Camera feed"/> })}
        </div>
    }
}
