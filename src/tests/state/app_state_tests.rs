use super::*;
use crate::model::Asset;

fn bin(id: i64, name: &str) -> Bin {
    Bin {
        id: BinId(id),
        name: name.to_string(),
        owner: 1,
        created_at: "2024-05-01T10:00:00Z".to_string(),
    }
}

fn doc(id: i64, bin: i64) -> Document {
    Document {
        id: DocumentId(id),
        name: format!("file{}.pdf", id),
        reference_name: format!("ref{}", id),
        bin: BinId(bin),
        url: None,
        extract: String::new(),
        created_at: "2024-05-01T10:00:00Z".to_string(),
        language: None,
    }
}

fn app_state(dir: &tempfile::TempDir) -> AppState {
    AppState::new(LocalStore::init(dir.path(), false).unwrap()).unwrap()
}

#[test]
fn starts_empty_and_loading() {
    let dir = tempfile::tempdir().unwrap();
    let state = app_state(&dir);
    assert!(state.bins.get().is_empty());
    assert!(state.documents.get().is_empty());
    assert!(state.loading_bins.get());
    assert!(state.loading_documents.get());
    assert!(state.assets.is_empty());
}

#[test]
fn lookups_cover_bins_and_every_cached_list() {
    let dir = tempfile::tempdir().unwrap();
    let state = app_state(&dir);
    state.bins.set(vec![bin(1, "No Bin"), bin(2, "Taxes")]);
    state.documents.set(HashMap::from([
        ("No Bin".to_string(), vec![doc(10, 1)]),
        ("Taxes".to_string(), vec![doc(20, 2), doc(21, 2)]),
    ]));

    assert_eq!(state.find_bin(BinId(2)).map(|b| b.name), Some("Taxes".to_string()));
    assert_eq!(state.find_bin_by_name("No Bin").map(|b| b.id), Some(BinId(1)));
    assert!(state.find_bin(BinId(3)).is_none());
    assert_eq!(state.find_cached_document(DocumentId(21)), Some(doc(21, 2)));
    assert!(state.find_cached_document(DocumentId(99)).is_none());
    assert!(state.is_bin_cached("Taxes"));
    assert!(!state.is_bin_cached("Receipts"));
}

#[test]
fn expire_session_clears_token_and_assets_but_keeps_lists() {
    let dir = tempfile::tempdir().unwrap();
    let state = app_state(&dir);
    state.token.set("tok").unwrap();
    state.bins.set(vec![bin(1, "No Bin")]);
    state.assets.insert(
        DocumentId(1),
        Asset {
            bytes: vec![1, 2, 3],
            content_type: "image/png".to_string(),
        },
    );

    state.expire_session();

    assert_eq!(state.token.get(), "");
    assert_eq!(LocalStore::open(dir.path()).unwrap().get_token().unwrap(), "");
    assert!(state.assets.is_empty());
    assert_eq!(state.bins.get().len(), 1);
}

#[test]
fn logout_resets_everything() {
    let dir = tempfile::tempdir().unwrap();
    let state = app_state(&dir);
    state.token.set("tok").unwrap();
    state.bins.set(vec![bin(1, "No Bin")]);
    state.loading_bins.set(false);
    state
        .documents
        .set(HashMap::from([("No Bin".to_string(), vec![doc(10, 1)])]));

    state.logout().unwrap();

    assert!(!state.token.is_authenticated());
    assert!(state.bins.get().is_empty());
    assert!(state.documents.get().is_empty());
    assert!(state.loading_bins.get());
}

#[test]
fn asset_cache_mints_distinct_references() {
    let dir = tempfile::tempdir().unwrap();
    let state = app_state(&dir);
    let a = state.assets.object_url(DocumentId(4));
    let b = state.assets.object_url(DocumentId(4));
    assert_ne!(a, b);
    assert!(a.starts_with("blob:suraksheet/4/"));

    state.assets.insert(
        DocumentId(4),
        Asset {
            bytes: vec![0; 8],
            content_type: "application/pdf".to_string(),
        },
    );
    assert!(state.assets.contains(DocumentId(4)));
    assert!(state.assets.release(DocumentId(4)));
    assert!(!state.assets.release(DocumentId(4)));
}
