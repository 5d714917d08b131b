use super::*;

const BIN_NAME_MIN: usize = 3;
const BIN_NAME_MAX: usize = 100;

/// Bin names must be 3 to 100 characters, and "No Bin" is reserved.
pub fn validate_bin_name(name: &str) -> ClientResult<&str> {
    let name = name.trim();
    let len = name.chars().count();
    if !(BIN_NAME_MIN..=BIN_NAME_MAX).contains(&len) {
        return Err(ClientError::Invalid(format!(
            "bin name must be between {} and {} characters",
            BIN_NAME_MIN, BIN_NAME_MAX
        )));
    }
    if name == NO_BIN {
        return Err(ClientError::Invalid(format!("\"{}\" is reserved", NO_BIN)));
    }
    Ok(name)
}

/// Creates a bin, then reloads the bins list (the server does not echo it back).
pub fn create_bin(state: &AppState, client: &RemoteClient, name: &str) -> ClientResult<Bin> {
    let name = validate_bin_name(name)?;
    if state.find_bin_by_name(name).is_some() {
        return Err(ClientError::Invalid(format!("bin already exists: {}", name)));
    }

    observe(state, client.create_bin(name))?;
    let bins = observe(state, client.list_bins())?;
    state.bins.set(bins);
    state.loading_bins.set(false);

    state.find_bin_by_name(name).ok_or_else(|| ClientError::Server {
        status: 0,
        message: format!("created bin {} missing from listing", name),
    })
}

/// Renames a bin and re-keys its cached documents under the new name.
pub fn rename_bin(
    state: &AppState,
    client: &RemoteClient,
    id: BinId,
    name: &str,
) -> ClientResult<Bin> {
    let name = validate_bin_name(name)?;
    let Some(bin) = state.find_bin(id) else {
        return Err(ClientError::Invalid("Invalid Bin".to_string()));
    };
    if bin.is_default() {
        return Err(ClientError::Invalid(format!("\"{}\" cannot be renamed", NO_BIN)));
    }
    if bin.name == name {
        return Ok(bin);
    }

    observe(state, client.rename_bin(id, name))?;

    state.bins.update(|bins| {
        for b in bins.iter_mut().filter(|b| b.id == id) {
            b.name = name.to_string();
        }
    });
    state.documents.update(|docs| {
        if let Some(list) = docs.remove(&bin.name) {
            docs.insert(name.to_string(), list);
        }
    });

    let mut renamed = bin;
    renamed.name = name.to_string();
    Ok(renamed)
}

/// Deletes a bin with all its documents and drops everything cached for it.
pub fn delete_bin(state: &AppState, client: &RemoteClient, id: BinId) -> ClientResult<()> {
    let Some(bin) = state.find_bin(id) else {
        return Err(ClientError::Invalid("Invalid Bin".to_string()));
    };
    if bin.is_default() {
        return Err(ClientError::Invalid(format!("\"{}\" cannot be deleted", NO_BIN)));
    }

    observe(state, client.delete_bin(id))?;

    state.bins.update(|bins| bins.retain(|b| b.id != id));
    let dropped = state
        .documents
        .update(|docs| docs.remove(&bin.name).unwrap_or_default());
    for doc in dropped {
        state.assets.release(doc.id);
    }
    tracing::info!(bin = %bin.name, "bin deleted");
    Ok(())
}
