use super::*;

#[test]
fn parses_known_routes() {
    assert_eq!(Route::parse("/"), Some(Route::Home));
    assert_eq!(Route::parse(""), Some(Route::Home));
    assert_eq!(Route::parse("/login"), Some(Route::Login));
    assert_eq!(Route::parse("/bin/12"), Some(Route::Bin("12".to_string())));
    assert_eq!(
        Route::parse("/document/7/?tab=extract"),
        Some(Route::Document("7".to_string()))
    );
}

#[test]
fn slugs_are_passed_through_unparsed() {
    assert_eq!(Route::parse("/bin/abc"), Some(Route::Bin("abc".to_string())));
}

#[test]
fn unknown_routes_are_rejected() {
    assert_eq!(Route::parse("/bins"), None);
    assert_eq!(Route::parse("/bin/1/extra"), None);
    assert_eq!(Route::parse("/document"), None);
}

#[test]
fn load_helpers() {
    let data: Load<u32> = Load::Data(2);
    assert_eq!(data.clone().map(|v| v * 2), Load::Data(4));
    assert_eq!(data.data(), Some(2));

    let err: Load<u32> = Load::Error("Invalid Bin".to_string());
    assert_eq!(err.error(), Some("Invalid Bin"));
    assert!(Load::<u32>::Redirect(LOGIN_ROUTE.to_string()).is_redirect());
}
