use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomePage;

/// The landing page requires a token.
pub fn load_home(state: &AppState) -> Load<HomePage> {
    if !state.token.is_authenticated() {
        return Load::Redirect(LOGIN_ROUTE.to_string());
    }
    Load::Data(HomePage)
}
