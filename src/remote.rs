use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::state::TokenStore;

mod http_client;

mod types;
pub use self::types::*;
mod assets;
mod bins;
mod documents;

pub struct RemoteClient {
    base_url: String,
    token: TokenStore,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    /// `base_url` is the API root (e.g. `http://host:8080/api/v1`). The bearer
    /// token is read from `token` at request time.
    pub fn new(base_url: impl Into<String>, token: TokenStore) -> ClientResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("suraksheet/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
#[path = "tests/remote/http_client_tests.rs"]
mod tests;
