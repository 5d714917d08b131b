mod config;
mod ids;
mod records;

pub use self::config::{ClientConfig, ClientState, DEFAULT_SERVER_URL, SERVER_URL_ENV};
pub use self::ids::{BinId, DocumentId};
pub use self::records::{Asset, Bin, Document, Language, NO_BIN};
