pub mod error;
pub mod format;
pub mod loaders;
pub mod logging;
pub mod model;
pub mod notify;
pub mod operations;
pub mod remote;
pub mod state;
pub mod store;

pub use self::error::{ClientError, ClientResult};
