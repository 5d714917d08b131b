use super::*;

impl RemoteClient {
    /// Maps a response to `Ok` for 2xx.
    ///
    /// 401, and 403 carrying the auth middleware's "permission denied" (or no
    /// message at all), mean the session has expired. Any other failure keeps
    /// the server's `error` message when present.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> ClientResult<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        let server_message = server_error_message(&body);
        if is_session_rejection(status, server_message.as_deref()) {
            tracing::debug!(label, status = status.as_u16(), "session rejected");
            return Err(ClientError::SessionExpired {
                status: status.as_u16(),
            });
        }

        let message =
            server_message.unwrap_or_else(|| format!("{} failed ({})", label, status));
        tracing::debug!(label, status = status.as_u16(), %message, "request failed");
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }

    pub(super) fn auth(&self) -> String {
        format!("Bearer {}", self.token.get())
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

const PERMISSION_DENIED: &str = "permission denied";

pub(super) fn is_session_rejection(status: reqwest::StatusCode, message: Option<&str>) -> bool {
    match status {
        reqwest::StatusCode::UNAUTHORIZED => true,
        reqwest::StatusCode::FORBIDDEN => {
            message.is_none_or(|m| m.eq_ignore_ascii_case(PERMISSION_DENIED))
        }
        _ => false,
    }
}

/// Extracts `{"error": "..."}` from a failure body.
pub(super) fn server_error_message(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    v.get("error")
        .and_then(|e| e.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
