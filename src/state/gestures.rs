//! Gesture card catalogue and highlight matching.

#[cfg(test)]
#[path = "gestures_test.rs"]
mod gestures_test;

/// One card in the gesture grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureCard {
    /// Heading text; matched against the recognized gesture name.
    pub name: &'static str,
    pub action: &'static str,
    pub icon: &'static str,
}

pub const GESTURE_CARDS: &[GestureCard] = &[
    GestureCard { name: "Fist", action: "Mouse Mode", icon: "fas fa-hand-fist" },
    GestureCard { name: "Open Hand", action: "Draw Mode", icon: "fas fa-hand" },
    GestureCard { name: "Point", action: "Click", icon: "fas fa-hand-point-up" },
    GestureCard { name: "Peace", action: "Scroll", icon: "fas fa-hand-peace" },
];

/// Case-insensitive exact comparison of a card heading and a gesture name.
pub fn heading_matches(heading: &str, gesture: &str) -> bool {
    heading.to_lowercase() == gesture.to_lowercase()
}

/// Active flag for each heading, in order.
pub fn active_flags(headings: &[&str], gesture: &str) -> Vec<bool> {
    headings.iter().map(|h| heading_matches(h, gesture)).collect()
}
