use super::*;
use crate::model::{Asset, DocumentId};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

impl RemoteClient {
    /// Downloads the raw asset for a document. Does not touch any cache.
    pub fn get_asset_bytes(&self, id: DocumentId) -> ClientResult<Asset> {
        let resp = self
            .client
            .get(self.url(&format!("/document/{}/asset", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;
        let resp = self.ensure_ok(resp, "fetch asset")?;
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());
        let bytes = resp.bytes()?.to_vec();
        Ok(Asset {
            bytes,
            content_type,
        })
    }
}
