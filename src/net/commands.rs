//! Command dispatch for the panel controls.
//!
//! Every control maps to exactly one [`Command`]. A click or input event
//! fires one request, with no queuing, coalescing, or de-duplication, and the
//! local UI effect is applied only when the request completes.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged as `Failed to <action>: <error>` and swallowed. No
//! retry, no alert, and the panel state is left exactly as it was.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use leptos::prelude::*;

use super::api::{
    CommandError, CommandRequest, CommandTransport, Completed, MINIMIZE_PATH, SETTINGS_PATH,
    START_PATH, STOP_PATH,
};
use super::types::SettingsPatch;
use crate::state::panel::PanelState;

/// A user action forwarded to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Minimize,
    UpdateSettings(SettingsPatch),
}

/// Local effect of a completed command on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEffect {
    CaptureStarted,
    CaptureStopped,
}

impl Command {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Start => START_PATH,
            Self::Stop => STOP_PATH,
            Self::Minimize => MINIMIZE_PATH,
            Self::UpdateSettings(_) => SETTINGS_PATH,
        }
    }

    /// Verb phrase used in log lines.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Minimize => "minimize",
            Self::UpdateSettings(SettingsPatch::Smoothing(_)) => "update smoothing",
            Self::UpdateSettings(SettingsPatch::Sensitivity(_)) => "update sensitivity",
            Self::UpdateSettings(SettingsPatch::DrawingEnabled(_)) => "update drawing mode",
        }
    }

    /// Build the POST for this command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Encode`] if the settings body fails to serialize.
    pub fn request(&self) -> Result<CommandRequest, CommandError> {
        let body = match self {
            Self::UpdateSettings(patch) => {
                Some(serde_json::to_string(patch).map_err(|e| CommandError::Encode(e.to_string()))?)
            }
            Self::Start | Self::Stop | Self::Minimize => None,
        };
        Ok(CommandRequest { path: self.path(), body })
    }

    fn success_effect(&self) -> Option<PanelEffect> {
        match self {
            Self::Start => Some(PanelEffect::CaptureStarted),
            Self::Stop => Some(PanelEffect::CaptureStopped),
            Self::Minimize | Self::UpdateSettings(_) => None,
        }
    }
}

async fn send<T: CommandTransport>(transport: &T, command: &Command) -> Result<Completed, CommandError> {
    let request = command.request()?;
    transport.post(&request).await
}

/// Send `command` and return the panel effect to apply, if any.
///
/// Returns `None` on failure and for commands without a local effect.
pub async fn dispatch<T: CommandTransport>(transport: &T, command: &Command) -> Option<PanelEffect> {
    match send(transport, command).await {
        Ok(completed) => {
            if !completed.is_success() {
                log::warn!("{} returned status {}", command.path(), completed.status);
            }
            log::debug!("{} completed", command.action());
            command.success_effect()
        }
        Err(e) => {
            log::error!("Failed to {}: {e}", command.action());
            None
        }
    }
}

/// Fire `command` over HTTP as a local task and apply its effect to `panel`.
pub fn spawn_command(panel: RwSignal<PanelState>, command: Command) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            if let Some(effect) = dispatch(&super::api::HttpTransport, &command).await {
                panel.update(|p| p.apply_effect(effect));
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (panel, command);
    }
}
