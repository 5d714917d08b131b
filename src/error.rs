//! Error type surfaced by the remote client, operations and loaders.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the bearer token (401, or 403 "permission denied").
    #[error("session expired (status {status})")]
    SessionExpired { status: u16 },

    /// Rejected locally before any request was made.
    #[error("{0}")]
    Invalid(String),

    /// Non-success response; `message` is the server's `error` field when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::SessionExpired { status } | ClientError::Server { status, .. } => {
                Some(*status)
            }
            ClientError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Replaces the message of a server error, keeping session expiry intact.
    pub(crate) fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            ClientError::SessionExpired { .. } => self,
            other => ClientError::Server {
                status: other.status().unwrap_or_default(),
                message: message.into(),
            },
        }
    }
}
