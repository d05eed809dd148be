//! Grid of gesture cards; the card matching the current gesture is active.

use leptos::prelude::*;

use crate::state::gestures::GESTURE_CARDS;
use crate::state::panel::PanelState;

#[component]
pub fn GestureGrid() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();
    let active = Memo::new(move |_| panel.with(PanelState::active_cards));

    view! {
        <div class="gesture-grid">
            {GESTURE_CARDS
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    let class = move || {
                        if active.with(|flags| flags.get(index).copied().unwrap_or(false)) {
                            "gesture-card active"
                        } else {
                            "gesture-card"
                        }
                    };
                    view! {
                        <div class=class>
                            <i class=card.icon></i>
                            <h4>{card.name}</h4>
                            <p>{card.action}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
