use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Store;
use crate::model::{Asset, DocumentId};

/// Session-scoped asset cache keyed by document id.
///
/// Entries stay until [`AssetCache::release`], [`AssetCache::clear`] or
/// session expiry; there is no size-based eviction.
#[derive(Clone, Debug, Default)]
pub struct AssetCache {
    entries: Store<HashMap<DocumentId, Arc<Asset>>>,
    next_ref: Arc<AtomicU64>,
}

impl AssetCache {
    pub fn get(&self, id: DocumentId) -> Option<Arc<Asset>> {
        self.entries.with(|m| m.get(&id).cloned())
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.entries.with(|m| m.contains_key(&id))
    }

    pub fn insert(&self, id: DocumentId, asset: Asset) -> Arc<Asset> {
        let asset = Arc::new(asset);
        let stored = Arc::clone(&asset);
        self.entries.update(|m| {
            m.insert(id, stored);
        });
        asset
    }

    pub fn release(&self, id: DocumentId) -> bool {
        self.entries.update(|m| m.remove(&id).is_some())
    }

    pub fn clear(&self) {
        self.entries.set(HashMap::new());
    }

    pub fn len(&self) -> usize {
        self.entries.with(HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mints a fresh local reference for a cached asset.
    pub fn object_url(&self, id: DocumentId) -> String {
        let n = self.next_ref.fetch_add(1, Ordering::Relaxed) + 1;
        format!("blob:suraksheet/{}/{}", id, n)
    }

    pub fn store(&self) -> &Store<HashMap<DocumentId, Arc<Asset>>> {
        &self.entries
    }
}
