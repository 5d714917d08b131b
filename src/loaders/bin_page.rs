use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinPage {
    pub bin_id: BinId,
}

/// Resolves `slug` against the cached bins and makes sure the bin's
/// documents are cached.
pub fn load_bin_page(state: &AppState, client: &RemoteClient, slug: &str) -> Load<BinPage> {
    let Some(bin) = parse_id(slug).and_then(|id| state.find_bin(BinId(id))) else {
        return Load::Error("Invalid Bin".to_string());
    };

    if !state.is_bin_cached(&bin.name) {
        let docs = match client.list_documents(bin.id) {
            Ok(docs) => docs,
            Err(err) => return degrade(state, err, "Unable to fetch documents"),
        };
        let docs: Vec<Document> = docs.into_iter().map(Document::detached).collect();
        state.documents.update(|cached| {
            cached.insert(bin.name.clone(), docs);
        });
    }

    Load::Data(BinPage { bin_id: bin.id })
}
