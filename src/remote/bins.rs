//! `/bins` endpoints.

use super::*;
use crate::model::{Bin, BinId, Document};

impl RemoteClient {
    pub fn list_bins(&self) -> ClientResult<Vec<Bin>> {
        let resp = self
            .client
            .get(self.url("/bins"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;
        let bins: Vec<Bin> = self.ensure_ok(resp, "list bins")?.json()?;
        Ok(bins)
    }

    pub fn list_documents(&self, bin: BinId) -> ClientResult<Vec<Document>> {
        let resp = self
            .client
            .get(self.url(&format!("/bins/{}", bin)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;
        let docs: Vec<Document> = self.ensure_ok(resp, "list documents")?.json()?;
        Ok(docs)
    }

    pub fn create_bin(&self, name: &str) -> ClientResult<()> {
        let resp = self
            .client
            .post(self.url("/bins"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&CreateBinRequest { name })
            .send()?;
        let _ = self.ensure_ok(resp, "create bin")?;
        Ok(())
    }

    pub fn rename_bin(&self, id: BinId, name: &str) -> ClientResult<()> {
        let resp = self
            .client
            .patch(self.url("/bins"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&RenameBinRequest { id: id.get(), name })
            .send()?;
        let _ = self.ensure_ok(resp, "rename bin")?;
        Ok(())
    }

    pub fn delete_bin(&self, id: BinId) -> ClientResult<()> {
        let resp = self
            .client
            .delete(self.url("/bins"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&IdRequest::from(id))
            .send()?;
        let _ = self.ensure_ok(resp, "delete bin")?;
        Ok(())
    }
}
