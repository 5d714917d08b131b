//! Explicit application state shared by the client, operations and loaders.

use std::collections::HashMap;

use anyhow::Result;

use crate::model::{Bin, BinId, Document, DocumentId};
use crate::notify::Toasts;
use crate::store::LocalStore;

mod assets;
mod reactive;
mod token;

pub use self::assets::AssetCache;
pub use self::reactive::{Store, Subscription};
pub use self::token::TokenStore;

/// Cached documents, keyed by bin *name*.
pub type DocumentsByBin = HashMap<String, Vec<Document>>;

#[derive(Clone, Debug)]
pub struct AppState {
    pub token: TokenStore,
    pub bins: Store<Vec<Bin>>,
    pub loading_bins: Store<bool>,
    pub documents: Store<DocumentsByBin>,
    pub loading_documents: Store<bool>,
    pub assets: AssetCache,
    pub toasts: Toasts,
}

impl AppState {
    pub fn new(storage: LocalStore) -> Result<Self> {
        Self::with_toasts(storage, Toasts::default())
    }

    pub fn with_toasts(storage: LocalStore, toasts: Toasts) -> Result<Self> {
        Ok(Self {
            token: TokenStore::load(storage)?,
            bins: Store::new(Vec::new()),
            loading_bins: Store::new(true),
            documents: Store::new(HashMap::new()),
            loading_documents: Store::new(true),
            assets: AssetCache::default(),
            toasts,
        })
    }

    pub fn find_bin(&self, id: BinId) -> Option<Bin> {
        self.bins.with(|bins| bins.iter().find(|b| b.id == id).cloned())
    }

    pub fn find_bin_by_name(&self, name: &str) -> Option<Bin> {
        self.bins
            .with(|bins| bins.iter().find(|b| b.name == name).cloned())
    }

    pub fn cached_documents(&self, bin_name: &str) -> Option<Vec<Document>> {
        self.documents.with(|docs| docs.get(bin_name).cloned())
    }

    pub fn is_bin_cached(&self, bin_name: &str) -> bool {
        self.documents.with(|docs| docs.contains_key(bin_name))
    }

    /// Looks through every cached bin for a document.
    pub fn find_cached_document(&self, id: DocumentId) -> Option<Document> {
        self.documents.with(|docs| {
            docs.values()
                .flat_map(|list| list.iter())
                .find(|d| d.id == id)
                .cloned()
        })
    }

    /// Drops the session: clears the persisted token and session-scoped caches.
    pub fn expire_session(&self) {
        tracing::info!("session expired; clearing stored token");
        if let Err(err) = self.token.clear() {
            tracing::warn!(error = %format!("{:#}", err), "failed to clear stored token");
        }
        self.assets.clear();
    }

    /// Explicit logout: everything cached for the account is dropped.
    pub fn logout(&self) -> Result<()> {
        self.token.clear()?;
        self.assets.clear();
        self.bins.set(Vec::new());
        self.documents.set(HashMap::new());
        self.loading_bins.set(true);
        self.loading_documents.set(true);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/state/app_state_tests.rs"]
mod tests;
