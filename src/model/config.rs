use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/api/v1";
pub const SERVER_URL_ENV: &str = "SURAKSHEET_SERVER_URL";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    /// API base URL, including the `/api/v1` mount point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server_url: None,
        }
    }
}

impl ClientConfig {
    /// Picks the API base URL: explicit flag, then environment, then config file, then default.
    pub fn resolve_server_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        let url = flag
            .filter(|s| !s.trim().is_empty())
            .or(env.filter(|s| !s.trim().is_empty()))
            .or(self.server_url.as_deref())
            .unwrap_or(DEFAULT_SERVER_URL);
        url.trim().trim_end_matches('/').to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientState {
    pub version: u32,

    /// Bearer credential. Empty means unauthenticated.
    #[serde(default)]
    pub token: String,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            version: 1,
            token: String::new(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
