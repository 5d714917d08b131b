use std::collections::HashMap;

use super::*;
use crate::model::NO_BIN;

/// Session bootstrap: loads the bins list and the "No Bin" documents.
pub fn load_layout(state: &AppState, client: &RemoteClient) -> Load<()> {
    if !state.token.is_authenticated() {
        return Load::Data(());
    }

    let bins = match client.list_bins() {
        Ok(bins) => bins,
        // Any 403 on the bins listing ends the session, whatever the message.
        Err(ClientError::Server { status: 403, .. }) => return to_login(state),
        Err(err) => return degrade(state, err, "Unable to fetch bins"),
    };
    let default_bin = bins.iter().find(|b| b.is_default()).map(|b| b.id);
    state.bins.set(bins);
    state.loading_bins.set(false);

    let Some(default_bin) = default_bin else {
        tracing::warn!("bins listing has no \"{}\" entry", NO_BIN);
        return Load::Data(());
    };

    match client.list_documents(default_bin) {
        Ok(docs) => {
            let docs: Vec<Document> = docs.into_iter().map(Document::detached).collect();
            state
                .documents
                .set(HashMap::from([(NO_BIN.to_string(), docs)]));
            state.loading_documents.set(false);
        }
        Err(err) if err.is_session_expired() => return to_login(state),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load \"{}\" documents", NO_BIN);
        }
    }
    Load::Data(())
}
