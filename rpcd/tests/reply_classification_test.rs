/// Classification of raw HTTP replies into values or user-facing errors.
use rpcd::{classify, ApiError, RawReply, Status};
use serde::de::IgnoredAny;

#[test]
fn test_ok_reply_is_decoded() {
    let reply = RawReply::new(200, "OK", r#"{"layout":"main","running":["clock"]}"#);

    let status: Status = classify(&reply, false).unwrap();

    assert_eq!(status.running, vec!["clock".to_string()]);
    assert_eq!(status.active_layout(":0"), Some("main"));
}

#[test]
fn test_bad_request_uses_server_status() {
    let reply = RawReply::new(400, "Bad Request", r#"{"status":"No such command"}"#);

    let err = classify::<IgnoredAny>(&reply, false).unwrap_err();

    assert_eq!(err, ApiError::Rejected("No such command".to_string()));
    assert_eq!(err.to_string(), "No such command");
}

#[test]
fn test_bad_request_without_json_is_parse_error() {
    // The daemon answers some 400s with a bare status line and no body
    let reply = RawReply::new(400, "No such command", "");

    let err = classify::<IgnoredAny>(&reply, false).unwrap_err();

    assert!(matches!(err, ApiError::Parse(_)), "got {:?}", err);
}

#[test]
fn test_unreachable_messages() {
    let plain = classify::<IgnoredAny>(&RawReply::unreachable(), false).unwrap_err();
    let secure = classify::<IgnoredAny>(&RawReply::unreachable(), true).unwrap_err();

    assert!(plain.is_unreachable());
    assert_eq!(plain.to_string(), "Failed to access API");
    assert_eq!(
        secure.to_string(),
        "The API is not available via HTTPS, please connect via HTTP"
    );
}

#[test]
fn test_other_status_codes() {
    let reply = RawReply::new(500, "Already running", "");

    let err = classify::<IgnoredAny>(&reply, false).unwrap_err();

    assert_eq!(
        err,
        ApiError::Unexpected { code: 500, text: "Already running".to_string() }
    );
    assert_eq!(err.to_string(), "500: Already running");
    assert!(!err.is_unreachable());
}

#[test]
fn test_malformed_ok_body() {
    let reply = RawReply::new(200, "OK", "{\"running\": [");

    let err = classify::<Status>(&reply, false).unwrap_err();

    match err {
        ApiError::Parse(message) => assert!(!message.is_empty()),
        other => panic!("expected parse error, got {:?}", other),
    }
}
