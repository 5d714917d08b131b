use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentSource {
    Cached,
    Fetched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPage {
    pub doc_id: DocumentId,
    pub document: Document,
    pub source: DocumentSource,
}

/// Cache-first: every cached bin is searched before asking the server.
pub fn load_document_page(
    state: &AppState,
    client: &RemoteClient,
    slug: &str,
) -> Load<DocumentPage> {
    state.loading_documents.set(true);
    let Some(doc_id) = parse_id(slug).map(DocumentId) else {
        return Load::Error("Invalid Document".to_string());
    };

    if let Some(document) = state.find_cached_document(doc_id) {
        state.loading_documents.set(false);
        return Load::Data(DocumentPage {
            doc_id,
            document,
            source: DocumentSource::Cached,
        });
    }

    let document = match client.get_document(doc_id) {
        Ok(doc) => doc.detached(),
        Err(err) => return degrade(state, err, "Unable to fetch document"),
    };
    state.loading_documents.set(false);
    Load::Data(DocumentPage {
        doc_id,
        document,
        source: DocumentSource::Fetched,
    })
}
