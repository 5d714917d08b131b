//! Route-entry loaders: decide per navigation whether cached state suffices
//! or a fetch is needed, fill the stores, and return route-local data.

use crate::error::ClientError;
use crate::model::{BinId, Document, DocumentId};
use crate::remote::RemoteClient;
use crate::state::AppState;

mod bin_page;
mod document_page;
mod home;
mod layout;
mod router;

pub use self::bin_page::{BinPage, load_bin_page};
pub use self::document_page::{DocumentPage, DocumentSource, load_document_page};
pub use self::home::{HomePage, load_home};
pub use self::layout::load_layout;
pub use self::router::{Page, Route, Router};

pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of a loader. Failures are data, not errors, so the caller can render them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Load<T> {
    Data(T),
    Error(String),
    /// Leave client-side routing and go to this path.
    Redirect(String),
}

impl<T> Load<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Load<U> {
        match self {
            Load::Data(v) => Load::Data(f(v)),
            Load::Error(e) => Load::Error(e),
            Load::Redirect(to) => Load::Redirect(to),
        }
    }

    pub fn data(self) -> Option<T> {
        match self {
            Load::Data(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Load::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Load::Redirect(_))
    }
}

fn to_login<T>(state: &AppState) -> Load<T> {
    state.expire_session();
    Load::Redirect(LOGIN_ROUTE.to_string())
}

/// Converts a failed request into loader data: session expiry redirects,
/// everything else becomes `message`.
fn degrade<T>(state: &AppState, err: ClientError, message: &str) -> Load<T> {
    if err.is_session_expired() {
        return to_login(state);
    }
    tracing::warn!(error = %err, "{}", message);
    Load::Error(message.to_string())
}

fn parse_id(slug: &str) -> Option<i64> {
    slug.trim().parse::<i64>().ok()
}
