use super::http_client::server_error_message;

#[test]
fn error_message_prefers_error_field() {
    assert_eq!(
        server_error_message(r#"{"error": "document doesn't belong to user"}"#).as_deref(),
        Some("document doesn't belong to user")
    );
}

#[test]
fn error_message_ignores_other_bodies() {
    assert_eq!(server_error_message(r#"{"detail": "x"}"#), None);
    assert_eq!(server_error_message(r#"{"error": "  "}"#), None);
    assert_eq!(server_error_message("plain text"), None);
    assert_eq!(server_error_message(""), None);
}

#[test]
fn only_auth_rejections_count_as_session_expiry() {
    use super::http_client::is_session_rejection;
    use reqwest::StatusCode;

    assert!(is_session_rejection(StatusCode::UNAUTHORIZED, None));
    assert!(is_session_rejection(StatusCode::FORBIDDEN, None));
    assert!(is_session_rejection(
        StatusCode::FORBIDDEN,
        Some("permission denied")
    ));
    assert!(!is_session_rejection(
        StatusCode::FORBIDDEN,
        Some("document does not belong to user")
    ));
    assert!(!is_session_rejection(StatusCode::BAD_REQUEST, None));
    assert!(!is_session_rejection(
        StatusCode::INTERNAL_SERVER_ERROR,
        Some("permission denied")
    ));
}
