//! Client operations that talk to the API and write results back into
//! [`AppState`].

use std::sync::Arc;

use crate::error::{ClientError, ClientResult};
use crate::model::{Asset, Bin, BinId, Document, DocumentId, Language, NO_BIN};
use crate::remote::{RemoteClient, Upload};
use crate::state::AppState;

mod assets;
mod bins;
mod documents;

pub use self::assets::{AssetHandle, get_asset};
pub use self::bins::{create_bin, delete_bin, rename_bin, validate_bin_name};
pub use self::documents::{
    delete_document, rename_document, search_documents, upload_document, upload_file,
};

/// Runs the session-expiry policy for any expired-session error passing through.
pub(crate) fn observe<T>(state: &AppState, result: ClientResult<T>) -> ClientResult<T> {
    if let Err(err) = &result
        && err.is_session_expired()
    {
        state.expire_session();
    }
    result
}
