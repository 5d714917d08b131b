//! Request payloads for the document-storage API.

use crate::model::{BinId, DocumentId};

#[derive(Debug, serde::Serialize)]
pub(super) struct IdRequest {
    pub(super) id: i64,
}

impl From<DocumentId> for IdRequest {
    fn from(id: DocumentId) -> Self {
        Self { id: id.get() }
    }
}

impl From<BinId> for IdRequest {
    fn from(id: BinId) -> Self {
        Self { id: id.get() }
    }
}

#[derive(Debug, serde::Serialize)]
pub(super) struct CreateBinRequest<'a> {
    pub(super) name: &'a str,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct RenameBinRequest<'a> {
    pub(super) id: i64,
    pub(super) name: &'a str,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RenameDocumentRequest<'a> {
    pub(super) id: i64,
    pub(super) reference_name: &'a str,
}

/// File body for `POST /document`.
#[derive(Clone, Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
