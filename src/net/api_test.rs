use super::*;

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(START_PATH, "/start");
    assert_eq!(STOP_PATH, "/stop");
    assert_eq!(MINIMIZE_PATH, "/minimize");
    assert_eq!(SETTINGS_PATH, "/update-settings");
}

#[test]
fn completed_success_covers_2xx_only() {
    assert!(Completed { status: 200 }.is_success());
    assert!(Completed { status: 204 }.is_success());
    assert!(!Completed { status: 302 }.is_success());
    assert!(!Completed { status: 500 }.is_success());
}

#[test]
fn command_error_messages_carry_cause() {
    assert_eq!(
        CommandError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
    assert_eq!(
        CommandError::Encode("bad body".to_owned()).to_string(),
        "could not encode request: bad body"
    );
}

#[test]
fn unavailable_error_is_network_failure() {
    assert!(matches!(unavailable_error(), CommandError::Network(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_transport_reports_network_error() {
    let request = CommandRequest { path: START_PATH, body: None };
    let result = futures::executor::block_on(HttpTransport.post(&request));
    assert_eq!(result, Err(unavailable_error()));
}
