use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

use self::cli_subcommands::{BinCommands, ConfigCommands, DocCommands};

#[derive(Parser)]
#[command(name = "suraksheet")]
#[command(about = "Suraksheet document storage client", long_about = None)]
pub(crate) struct Cli {
    /// Client state directory (defaults to ./.suraksheet)
    #[arg(long, global = true, env = "SURAKSHEET_HOME")]
    state_dir: Option<PathBuf>,

    /// API base URL (overrides SURAKSHEET_SERVER_URL and config.json)
    #[arg(long, global = true)]
    server_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Store a bearer token for subsequent commands
    Login {
        #[arg(long)]
        token: String,
    },

    /// Forget the stored token
    Logout,

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Load a route (`/`, `/bin/<id>`, `/document/<id>`) and print its data
    Open {
        path: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List bins
    Bins {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage bins
    Bin {
        #[command(subcommand)]
        command: BinCommands,
    },

    /// Manage documents
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
