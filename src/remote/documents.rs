//! `/document` endpoints.

use super::*;
use crate::model::{BinId, Document, DocumentId, Language};

impl RemoteClient {
    pub fn get_document(&self, id: DocumentId) -> ClientResult<Document> {
        let resp = self
            .client
            .get(self.url(&format!("/document/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;
        let doc: Document = self.ensure_ok(resp, "get document")?.json()?;
        Ok(doc)
    }

    pub fn delete_document(&self, id: DocumentId) -> ClientResult<()> {
        let resp = self
            .client
            .delete(self.url("/document"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&IdRequest::from(id))
            .send()?;
        let _ = self.ensure_ok(resp, "delete document")?;
        Ok(())
    }

    pub fn rename_document(&self, id: DocumentId, reference_name: &str) -> ClientResult<()> {
        let resp = self
            .client
            .patch(self.url("/document"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&RenameDocumentRequest {
                id: id.get(),
                reference_name,
            })
            .send()?;
        let _ = self.ensure_ok(resp, "rename document")?;
        Ok(())
    }

    pub fn upload_document(
        &self,
        bin: BinId,
        reference_name: &str,
        language: Language,
        upload: Upload,
    ) -> ClientResult<Document> {
        let form = reqwest::blocking::multipart::Form::new()
            .text("referenceName", reference_name.to_string())
            .text("binID", bin.to_string())
            .text("language", language.as_str())
            .part(
                "file",
                reqwest::blocking::multipart::Part::bytes(upload.bytes)
                    .file_name(upload.file_name),
            );
        let resp = self
            .client
            .post(self.url("/document"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .multipart(form)
            .send()?;
        let doc: Document = self.ensure_ok(resp, "upload document")?.json()?;
        Ok(doc)
    }

    pub fn search_documents(&self, query: &str) -> ClientResult<Vec<Document>> {
        let resp = self
            .client
            .get(self.url("/document/search"))
            .query(&[("q", query)])
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()?;
        let docs: Vec<Document> = self.ensure_ok(resp, "search documents")?.json()?;
        Ok(docs)
    }
}
