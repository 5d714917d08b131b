use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the resolved configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Persist settings to config.json
    Set {
        #[arg(long)]
        server_url: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum BinCommands {
    /// Create a bin
    Create { name: String },

    /// Rename a bin
    Rename { id: i64, name: String },

    /// Delete a bin and every document in it
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum DocCommands {
    /// Show a document
    Show {
        id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a document
    Delete { id: i64 },

    /// Change a document's reference name
    Rename { id: i64, reference_name: String },

    /// Upload a file into a bin
    Upload {
        #[arg(long)]
        bin: i64,
        #[arg(long)]
        reference: String,
        /// Extraction language: eng|nep
        #[arg(long, default_value = "eng")]
        language: String,
        file: PathBuf,
    },

    /// Search extracted document text
    Search {
        query: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Download a document's asset
    Asset {
        id: i64,
        /// Output path (defaults to the reference name plus extension)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Name the file as a compressed copy
        #[arg(long)]
        compressed: bool,
    },
}
