use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Bin(String),
    Document(String),
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Home),
            ["login"] => Some(Route::Login),
            ["bin", slug] => Some(Route::Bin((*slug).to_string())),
            ["document", slug] => Some(Route::Document((*slug).to_string())),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home(HomePage),
    Login,
    Bin(BinPage),
    Document(DocumentPage),
}

/// Runs the layout loader ahead of every page loader, once per token value.
pub struct Router<'a> {
    state: &'a AppState,
    client: &'a RemoteClient,
    layout_loaded_for: Option<String>,
}

impl<'a> Router<'a> {
    pub fn new(state: &'a AppState, client: &'a RemoteClient) -> Self {
        Self {
            state,
            client,
            layout_loaded_for: None,
        }
    }

    pub fn navigate(&mut self, path: &str) -> Load<Page> {
        let Some(route) = Route::parse(path) else {
            return Load::Error("Not Found".to_string());
        };
        tracing::debug!(path, ?route, "navigate");

        if route == Route::Login {
            return Load::Data(Page::Login);
        }

        let token = self.state.token.get();
        if self.layout_loaded_for.as_deref() != Some(token.as_str()) {
            match load_layout(self.state, self.client) {
                Load::Data(()) => self.layout_loaded_for = Some(token),
                Load::Error(e) => return Load::Error(e),
                Load::Redirect(to) => {
                    self.layout_loaded_for = None;
                    return Load::Redirect(to);
                }
            }
        }

        match route {
            Route::Home => load_home(self.state).map(Page::Home),
            Route::Login => Load::Data(Page::Login),
            Route::Bin(slug) => load_bin_page(self.state, self.client, &slug).map(Page::Bin),
            Route::Document(slug) => {
                load_document_page(self.state, self.client, &slug).map(Page::Document)
            }
        }
    }

    /// Forces the layout loader to run again on the next navigation.
    pub fn invalidate(&mut self) {
        self.layout_loaded_for = None;
    }
}

#[cfg(test)]
#[path = "../tests/loaders/route_tests.rs"]
mod tests;
