//! Global keyboard shortcuts.
//!
//! Shortcuts stand in for clicking a button, so they inherit the button's
//! enabled state: `q` while Stop is disabled does nothing.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Button a shortcut clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Stop,
    Minimize,
}

/// Map a `KeyboardEvent.key` value to a shortcut. No modifier checks.
pub fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    match key {
        "q" | "Q" => Some(Shortcut::Stop),
        "m" | "M" => Some(Shortcut::Minimize),
        _ => None,
    }
}

impl Shortcut {
    /// Key shown in the on-screen hint.
    pub fn key_hint(self) -> &'static str {
        match self {
            Self::Stop => "Q",
            Self::Minimize => "M",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::Minimize => "Minimize",
        }
    }
}

pub const SHORTCUTS: &[Shortcut] = &[Shortcut::Stop, Shortcut::Minimize];
