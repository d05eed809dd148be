use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

/// In-memory transport that records every request it is handed.
struct RecordingTransport {
    requests: RefCell<Vec<CommandRequest>>,
    outcome: Result<Completed, CommandError>,
}

impl RecordingTransport {
    fn ok() -> Self {
        Self::with_outcome(Ok(Completed { status: 200 }))
    }

    fn failing() -> Self {
        Self::with_outcome(Err(CommandError::Network("connection refused".to_owned())))
    }

    fn with_outcome(outcome: Result<Completed, CommandError>) -> Self {
        Self { requests: RefCell::new(Vec::new()), outcome }
    }

    fn bodies(&self) -> Vec<serde_json::Value> {
        self.requests
            .borrow()
            .iter()
            .map(|r| serde_json::from_str(r.body.as_deref().expect("body")).expect("json body"))
            .collect()
    }
}

impl CommandTransport for RecordingTransport {
    async fn post(&self, request: &CommandRequest) -> Result<Completed, CommandError> {
        self.requests.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

fn run(transport: &RecordingTransport, panel: &mut PanelState, command: Command) {
    if let Some(effect) = block_on(dispatch(transport, &command)) {
        panel.apply_effect(effect);
    }
}

// =============================================================
// Request encoding
// =============================================================

#[test]
fn capture_commands_post_without_body() {
    for (command, path) in [
        (Command::Start, "/start"),
        (Command::Stop, "/stop"),
        (Command::Minimize, "/minimize"),
    ] {
        let request = command.request().expect("request");
        assert_eq!(request.path, path);
        assert_eq!(request.body, None);
    }
}

#[test]
fn settings_command_posts_single_field_body() {
    let command = Command::UpdateSettings(SettingsPatch::Smoothing("55".to_owned()));
    let request = command.request().expect("request");
    assert_eq!(request.path, "/update-settings");
    assert_eq!(request.body.as_deref(), Some(r#"{"smoothing":"55"}"#));
}

#[test]
fn action_labels_name_each_control() {
    assert_eq!(Command::Start.action(), "start");
    assert_eq!(Command::Stop.action(), "stop");
    assert_eq!(Command::Minimize.action(), "minimize");
    assert_eq!(
        Command::UpdateSettings(SettingsPatch::DrawingEnabled(true)).action(),
        "update drawing mode"
    );
}

// =============================================================
// Start / Stop effects
// =============================================================

#[test]
fn successful_start_disables_start_and_enables_stop() {
    let transport = RecordingTransport::ok();
    let mut panel = PanelState::default();
    run(&transport, &mut panel, Command::Start);
    assert!(!panel.start_enabled);
    assert!(panel.stop_enabled);
}

#[test]
fn successful_stop_enables_start_and_disables_stop() {
    let transport = RecordingTransport::ok();
    let mut panel = PanelState::default();
    run(&transport, &mut panel, Command::Start);
    run(&transport, &mut panel, Command::Stop);
    assert!(panel.start_enabled);
    assert!(!panel.stop_enabled);
}

#[test]
fn failed_start_leaves_buttons_unchanged() {
    let transport = RecordingTransport::failing();
    let mut panel = PanelState::default();
    let before = (panel.start_enabled, panel.stop_enabled);
    run(&transport, &mut panel, Command::Start);
    assert_eq!((panel.start_enabled, panel.stop_enabled), before);
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[test]
fn failed_stop_leaves_buttons_unchanged() {
    let mut panel = PanelState::default();
    run(&RecordingTransport::ok(), &mut panel, Command::Start);
    let before = (panel.start_enabled, panel.stop_enabled);
    run(&RecordingTransport::failing(), &mut panel, Command::Stop);
    assert_eq!((panel.start_enabled, panel.stop_enabled), before);
}

#[test]
fn error_status_still_counts_as_completed() {
    let transport = RecordingTransport::with_outcome(Ok(Completed { status: 500 }));
    let mut panel = PanelState::default();
    run(&transport, &mut panel, Command::Start);
    assert!(!panel.start_enabled);
    assert!(panel.stop_enabled);
}

#[test]
fn minimize_has_no_local_effect() {
    let transport = RecordingTransport::ok();
    assert_eq!(block_on(dispatch(&transport, &Command::Minimize)), None);
    assert_eq!(transport.requests.borrow()[0].path, "/minimize");
}

// =============================================================
// Settings patches
// =============================================================

#[test]
fn each_settings_control_sends_exactly_one_key() {
    let transport = RecordingTransport::ok();
    let mut panel = PanelState::default();
    run(&transport, &mut panel, Command::UpdateSettings(SettingsPatch::Smoothing("12".to_owned())));
    run(&transport, &mut panel, Command::UpdateSettings(SettingsPatch::Sensitivity("88".to_owned())));
    run(&transport, &mut panel, Command::UpdateSettings(SettingsPatch::DrawingEnabled(false)));

    let bodies = transport.bodies();
    assert_eq!(
        bodies,
        vec![
            serde_json::json!({ "smoothing": "12" }),
            serde_json::json!({ "sensitivity": "88" }),
            serde_json::json!({ "drawingEnabled": false }),
        ]
    );
    for body in &bodies {
        assert_eq!(body.as_object().expect("object").len(), 1);
    }
}

#[test]
fn repeated_inputs_fire_one_request_each() {
    let transport = RecordingTransport::ok();
    for value in ["10", "11", "12"] {
        block_on(dispatch(
            &transport,
            &Command::UpdateSettings(SettingsPatch::Smoothing(value.to_owned())),
        ));
    }
    assert_eq!(transport.requests.borrow().len(), 3);
}

#[test]
fn settings_failure_has_no_effect() {
    let transport = RecordingTransport::failing();
    let command = Command::UpdateSettings(SettingsPatch::Sensitivity("3".to_owned()));
    assert_eq!(block_on(dispatch(&transport, &command)), None);
}
