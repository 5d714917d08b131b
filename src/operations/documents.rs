use std::path::Path;

use super::*;

fn deletion_error(reason: &str) -> String {
    format!("Unable to delete: {}", reason)
}

/// Deletes `doc` on the server and drops it from its bin's cached list when
/// that list is cached. The parent bin must be in the bins snapshot.
pub fn delete_document(
    state: &AppState,
    client: &RemoteClient,
    doc: &Document,
) -> ClientResult<bool> {
    if doc.id.get() <= 0 {
        return Err(ClientError::Invalid(deletion_error("Invalid document")));
    }
    let Some(bin) = state.find_bin(doc.bin) else {
        return Err(ClientError::Invalid(deletion_error("Invalid bin")));
    };

    observe(state, client.delete_document(doc.id)).map_err(|err| match err {
        ClientError::Server { status, message } => ClientError::Server {
            status,
            message: deletion_error(&message),
        },
        other => other,
    })?;

    state.documents.update(|docs| {
        if let Some(list) = docs.get_mut(&bin.name) {
            list.retain(|d| d.id != doc.id);
        }
    });
    state.assets.release(doc.id);
    tracing::info!(document = %doc.id, bin = %bin.name, "document deleted");
    Ok(true)
}

/// Changes a document's reference name. An unchanged name makes no request.
pub fn rename_document(
    state: &AppState,
    client: &RemoteClient,
    doc: &Document,
    reference_name: &str,
) -> ClientResult<Document> {
    let reference_name = reference_name.trim();
    if reference_name.is_empty() {
        return Err(ClientError::Invalid("reference name is required".to_string()));
    }
    if doc.reference_name == reference_name {
        return Ok(doc.clone());
    }

    observe(state, client.rename_document(doc.id, reference_name))?;

    let mut renamed = doc.clone();
    renamed.reference_name = reference_name.to_string();
    state.documents.update(|docs| {
        for d in docs.values_mut().flat_map(|list| list.iter_mut()) {
            if d.id == doc.id {
                d.reference_name = reference_name.to_string();
            }
        }
    });
    Ok(renamed)
}

/// Uploads a new document into `bin`. The returned record is appended to the
/// bin's cached list when that list is cached.
pub fn upload_document(
    state: &AppState,
    client: &RemoteClient,
    bin: BinId,
    reference_name: &str,
    language: Language,
    upload: Upload,
) -> ClientResult<Document> {
    let reference_name = reference_name.trim();
    if reference_name.is_empty() {
        return Err(ClientError::Invalid("reference name is required".to_string()));
    }
    let Some(bin) = state.find_bin(bin) else {
        return Err(ClientError::Invalid("Invalid bin".to_string()));
    };

    let doc = observe(
        state,
        client.upload_document(bin.id, reference_name, language, upload),
    )?
    .detached();

    state.documents.update(|docs| {
        if let Some(list) = docs.get_mut(&bin.name) {
            list.push(doc.clone());
        }
    });
    tracing::info!(document = %doc.id, bin = %bin.name, "document uploaded");
    Ok(doc)
}

/// Reads `path` from disk and uploads it; the file name is taken from the path.
pub fn upload_file(
    state: &AppState,
    client: &RemoteClient,
    bin: BinId,
    reference_name: &str,
    language: Language,
    path: &Path,
) -> ClientResult<Document> {
    let bytes = std::fs::read(path).map_err(|source| ClientError::Io {
        context: format!("read {}", path.display()),
        source,
    })?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    upload_document(
        state,
        client,
        bin,
        reference_name,
        language,
        Upload { file_name, bytes },
    )
}

/// Full-text search over extracted document text. Results are not cached.
pub fn search_documents(
    state: &AppState,
    client: &RemoteClient,
    query: &str,
) -> ClientResult<Vec<Document>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ClientError::Invalid("search query is required".to_string()));
    }
    let docs = observe(state, client.search_documents(query))?;
    Ok(docs.into_iter().map(Document::detached).collect())
}
