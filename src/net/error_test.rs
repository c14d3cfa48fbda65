use super::*;

#[test]
fn error_codes_are_stable() {
    assert_eq!(ApiError::Configuration.error_code(), "E_CONFIGURATION");
    assert_eq!(ApiError::Transport { status: 404, body: String::new() }.error_code(), "E_HTTP_STATUS");
    assert_eq!(
        ApiError::Network { endpoint: "u".into(), reason: "r".into() }.error_code(),
        "E_NETWORK"
    );
    assert_eq!(ApiError::MalformedResponse("x".into()).error_code(), "E_MALFORMED_RESPONSE");
    assert_eq!(ApiError::Application("x".into()).error_code(), "E_APPLICATION");
}

#[test]
fn transport_error_names_status() {
    let err = ApiError::Transport { status: 403, body: "denied".into() };
    assert_eq!(err.to_string(), "HTTP error! status: 403");
}

#[test]
fn transport_user_message_lists_misconfiguration_causes() {
    let msg = ApiError::Transport { status: 500, body: String::new() }.user_message();
    assert!(msg.starts_with("HTTP error! status: 500"));
    assert!(msg.contains("Possible causes:"));
    assert!(msg.contains("1. the web app deployment URL is wrong"));
    assert!(msg.contains("spreadsheet ID"));
}

#[test]
fn network_user_message_includes_checklist_and_endpoint() {
    let err = ApiError::Network { endpoint: "https://example.test/exec".into(), reason: "dns".into() };
    let msg = err.user_message();
    assert!(msg.starts_with("A network error occurred."));
    assert!(msg.contains("3. the internet connection is down"));
    assert!(msg.contains("\n\nConfigured URL: https://example.test/exec\n"));
    assert!(msg.ends_with("Details: dns"));
}

#[test]
fn application_user_message_is_backend_text_only() {
    let err = ApiError::Application("no sheet".into());
    assert_eq!(err.to_string(), "no sheet");
    assert_eq!(err.user_message(), "no sheet");
    assert!(err.causes().is_empty());
}

#[test]
fn configuration_message_explains_setup() {
    let msg = ApiError::Configuration.user_message();
    assert!(msg.contains("not configured"));
    assert!(msg.contains("SSAP_ENDPOINT_URL"));
}
