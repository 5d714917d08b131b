use serde::{Deserialize, Serialize};

use super::{BinId, DocumentId};

/// Name of the reserved default bin every account owns.
pub const NO_BIN: &str = "No Bin";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub id: BinId,
    pub name: String,
    pub owner: i64,
    pub created_at: String,
}

impl Bin {
    pub fn is_default(&self) -> bool {
        self.name == NO_BIN
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub reference_name: String,
    pub bin: BinId,

    /// Local object reference for a fetched asset; never meaningful on the wire.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub extract: String,

    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Document {
    /// Drops any server-provided `url` so the record is safe to cache.
    pub fn detached(mut self) -> Self {
        self.url = None;
        self
    }

    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext)
    }
}

/// Raw asset bytes for a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl Asset {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Eng,
    Nep,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Eng => "eng",
            Language::Nep => "nep",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eng" => Ok(Language::Eng),
            "nep" => Ok(Language::Nep),
            other => Err(format!("language not supported: {} (expected eng|nep)", other)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/records_tests.rs"]
mod tests;
