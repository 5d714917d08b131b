use super::*;

#[test]
fn server_url_precedence_is_flag_env_file_default() {
    let cfg = ClientConfig {
        version: 1,
        server_url: Some("http://file:1/api/v1".to_string()),
    };
    assert_eq!(
        cfg.resolve_server_url(Some("http://flag:1/api/v1/"), Some("http://env:1")),
        "http://flag:1/api/v1"
    );
    assert_eq!(
        cfg.resolve_server_url(None, Some("http://env:1")),
        "http://env:1"
    );
    assert_eq!(cfg.resolve_server_url(Some("  "), None), "http://file:1/api/v1");
    assert_eq!(
        ClientConfig::default().resolve_server_url(None, None),
        DEFAULT_SERVER_URL
    );
}

#[test]
fn state_token_defaults_to_empty() {
    let st: ClientState = serde_json::from_str(r#"{"version": 1}"#).unwrap();
    assert_eq!(st.token, "");
}
