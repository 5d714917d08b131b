use anyhow::{Context, Result};

use suraksheet::format::{created_label, download_file_name, readable_file_size};
use suraksheet::loaders::{Load, Page, Router};
use suraksheet::model::{BinId, Document, DocumentId, Language};
use suraksheet::notify::ToastKind;
use suraksheet::operations;
use suraksheet::state::AppState;

use crate::cli_runtime::{Session, require_layout};
use crate::cli_subcommands::{BinCommands, ConfigCommands, DocCommands};
use crate::Commands;

pub(crate) fn handle_command(session: &Session, command: Commands) -> Result<()> {
    let state = &session.state;
    match command {
        Commands::Login { token } => {
            let token = token.trim();
            if token.is_empty() {
                anyhow::bail!("token must not be empty");
            }
            state.token.set(token).context("store token")?;
            state.toasts.popup_default(ToastKind::Success, "Logged in");
        }
        Commands::Logout => {
            state.logout().context("clear token")?;
            state.toasts.popup_default(ToastKind::Success, "Logged out");
        }
        Commands::Config { command } => handle_config_command(session, command)?,
        Commands::Open { path, json } => {
            let mut router = Router::new(state, &session.client);
            match router.navigate(&path) {
                Load::Data(page) => print_page(state, &page, json)?,
                Load::Error(e) => anyhow::bail!(e),
                Load::Redirect(to) => {
                    state
                        .toasts
                        .popup_default(ToastKind::Warning, format!("Redirected to {}", to));
                }
            }
        }
        Commands::Bins { json } => {
            require_layout(session)?;
            let bins = state.bins.get();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&bins).context("serialize bins json")?
                );
            } else {
                for bin in bins {
                    let cached = state
                        .cached_documents(&bin.name)
                        .map(|d| format!(" ({} documents)", d.len()))
                        .unwrap_or_default();
                    println!(
                        "{} {} {}{}",
                        bin.id,
                        bin.name,
                        created_label(&bin.created_at),
                        cached
                    );
                }
            }
        }
        Commands::Bin { command } => {
            require_layout(session)?;
            handle_bin_command(session, command)?;
        }
        Commands::Doc { command } => {
            let mut router = require_layout(session)?;
            handle_doc_command(session, &mut router, command)?;
        }
    }
    Ok(())
}

fn handle_config_command(session: &Session, command: ConfigCommands) -> Result<()> {
    let store = session.state.token.storage();
    match command {
        ConfigCommands::Show { json } => {
            let authenticated = session.state.token.is_authenticated();
            if json {
                let v = serde_json::json!({
                    "state_dir": store.root().display().to_string(),
                    "server_url": session.client.base_url(),
                    "authenticated": authenticated,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&v).context("serialize config json")?
                );
            } else {
                println!("state_dir: {}", store.root().display());
                println!("server_url: {}", session.client.base_url());
                println!("authenticated: {}", authenticated);
            }
        }
        ConfigCommands::Set { server_url } => {
            let mut cfg = store.read_config()?;
            cfg.server_url = Some(server_url.trim().trim_end_matches('/').to_string());
            store.write_config(&cfg)?;
            println!("Configuration saved");
        }
    }
    Ok(())
}

fn handle_bin_command(session: &Session, command: BinCommands) -> Result<()> {
    let state = &session.state;
    let client = &session.client;
    match command {
        BinCommands::Create { name } => {
            let bin = operations::create_bin(state, client, &name)?;
            println!("{}", bin.id);
            state
                .toasts
                .popup_default(ToastKind::Success, format!("Created bin {}", bin.name));
        }
        BinCommands::Rename { id, name } => {
            let bin = operations::rename_bin(state, client, BinId(id), &name)?;
            state
                .toasts
                .popup_default(ToastKind::Success, format!("Renamed bin to {}", bin.name));
        }
        BinCommands::Delete { id } => {
            operations::delete_bin(state, client, BinId(id))?;
            state.toasts.popup_default(ToastKind::Success, "Bin deleted");
        }
    }
    Ok(())
}

fn handle_doc_command(
    session: &Session,
    router: &mut Router<'_>,
    command: DocCommands,
) -> Result<()> {
    let state = &session.state;
    let client = &session.client;
    match command {
        DocCommands::Show { id, json } => {
            let doc = resolve_document(router, id)?;
            print_document(&doc, json)?;
        }
        DocCommands::Delete { id } => {
            let doc = resolve_document(router, id)?;
            if state.find_bin(doc.bin).is_some_and(|b| !state.is_bin_cached(&b.name)) {
                // Cache the owning bin so the deletion is reflected locally.
                match router.navigate(&format!("/bin/{}", doc.bin)) {
                    Load::Redirect(_) => {
                        anyhow::bail!("session expired (run `suraksheet login --token ...`)")
                    }
                    Load::Error(e) => tracing::warn!(bin = %doc.bin, "{}", e),
                    Load::Data(_) => {}
                }
            }
            operations::delete_document(state, client, &doc)?;
            state
                .toasts
                .popup_default(ToastKind::Success, format!("Deleted {}", doc.reference_name));
        }
        DocCommands::Rename { id, reference_name } => {
            let doc = resolve_document(router, id)?;
            let renamed = operations::rename_document(state, client, &doc, &reference_name)?;
            state.toasts.popup_default(
                ToastKind::Success,
                format!("Renamed to {}", renamed.reference_name),
            );
        }
        DocCommands::Upload {
            bin,
            reference,
            language,
            file,
        } => {
            let language: Language = language.parse().map_err(anyhow::Error::msg)?;
            let doc =
                operations::upload_file(state, client, BinId(bin), &reference, language, &file)?;
            println!("{}", doc.id);
            state
                .toasts
                .popup_default(ToastKind::Success, format!("Uploaded {}", doc.name));
        }
        DocCommands::Search { query, json } => {
            let docs = operations::search_documents(state, client, &query)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&docs).context("serialize search json")?
                );
            } else if docs.is_empty() {
                state
                    .toasts
                    .popup_default(ToastKind::Warning, "No matching documents");
            } else {
                for doc in docs {
                    println!("{} {} ({})", doc.id, doc.reference_name, doc.name);
                }
            }
        }
        DocCommands::Asset {
            id,
            out,
            compressed,
        } => {
            let doc = resolve_document(router, id)?;
            let handle = operations::get_asset(state, client, doc.id)?;
            let path = out.unwrap_or_else(|| download_file_name(&doc, compressed).into());
            std::fs::write(&path, &handle.asset.bytes)
                .with_context(|| format!("write {}", path.display()))?;
            println!(
                "{} ({}, {})",
                path.display(),
                readable_file_size(handle.size),
                handle.content_type
            );
        }
    }
    Ok(())
}

fn resolve_document(router: &mut Router<'_>, id: i64) -> Result<Document> {
    match router.navigate(&format!("/document/{}", DocumentId(id))) {
        Load::Data(Page::Document(page)) => Ok(page.document),
        Load::Data(_) => anyhow::bail!("unexpected page for document {}", id),
        Load::Error(e) => anyhow::bail!(e),
        Load::Redirect(_) => anyhow::bail!("session expired (run `suraksheet login --token ...`)"),
    }
}

fn print_page(state: &AppState, page: &Page, json: bool) -> Result<()> {
    match page {
        Page::Login => println!("Login required (run `suraksheet login --token ...`)"),
        Page::Home(_) => {
            let docs = state
                .cached_documents(suraksheet::model::NO_BIN)
                .unwrap_or_default();
            if json {
                let v = serde_json::json!({ "bins": state.bins.get(), "documents": docs });
                println!("{}", serde_json::to_string_pretty(&v).context("serialize home")?);
            } else {
                for bin in state.bins.get() {
                    println!("[bin] {} {}", bin.id, bin.name);
                }
                for doc in docs {
                    println!("[doc] {} {}", doc.id, doc.reference_name);
                }
            }
        }
        Page::Bin(page) => {
            let bin = state
                .find_bin(page.bin_id)
                .context("bin vanished from cache")?;
            let docs = state.cached_documents(&bin.name).unwrap_or_default();
            if json {
                let v = serde_json::json!({ "bin": bin, "documents": docs });
                println!("{}", serde_json::to_string_pretty(&v).context("serialize bin")?);
            } else {
                println!("{} {}", bin.id, bin.name);
                for doc in docs {
                    println!(
                        "  {} {} ({}) {}",
                        doc.id,
                        doc.reference_name,
                        doc.name,
                        created_label(&doc.created_at)
                    );
                }
            }
        }
        Page::Document(page) => print_document(&page.document, json)?,
    }
    Ok(())
}

fn print_document(doc: &Document, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(doc).context("serialize document")?
        );
        return Ok(());
    }
    println!("id: {}", doc.id);
    println!("reference: {}", doc.reference_name);
    println!("file: {}", doc.name);
    println!("bin: {}", doc.bin);
    println!("created: {}", created_label(&doc.created_at));
    if !doc.extract.is_empty() {
        println!("extract:\n{}", doc.extract);
    }
    Ok(())
}
