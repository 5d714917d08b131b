use super::*;

/// A locally-minted reference to a cached asset plus its metadata.
#[derive(Clone, Debug)]
pub struct AssetHandle {
    pub url: String,
    pub size: u64,
    pub content_type: String,
    pub asset: Arc<Asset>,
}

impl AssetHandle {
    fn new(state: &AppState, id: DocumentId, asset: Arc<Asset>) -> Self {
        Self {
            url: state.assets.object_url(id),
            size: asset.size(),
            content_type: asset.content_type.clone(),
            asset,
        }
    }
}

/// Returns the asset for document `id`, fetching it at most once per session.
pub fn get_asset(
    state: &AppState,
    client: &RemoteClient,
    id: DocumentId,
) -> ClientResult<AssetHandle> {
    if let Some(asset) = state.assets.get(id) {
        tracing::debug!(document = %id, "asset cache hit");
        return Ok(AssetHandle::new(state, id, asset));
    }

    let asset = observe(state, client.get_asset_bytes(id))
        .map_err(|err| err.with_message("Failed to fetch asset"))?;
    tracing::debug!(document = %id, size = asset.size(), "asset fetched");
    let asset = state.assets.insert(id, asset);
    Ok(AssetHandle::new(state, id, asset))
}
