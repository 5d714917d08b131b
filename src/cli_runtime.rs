use anyhow::{Context, Result};
use clap::Parser;

use suraksheet::loaders::{LOGIN_ROUTE, Load, Router};
use suraksheet::model::SERVER_URL_ENV;
use suraksheet::remote::RemoteClient;
use suraksheet::state::AppState;
use suraksheet::store::LocalStore;

use crate::Cli;

pub(crate) struct Session {
    pub(crate) state: AppState,
    pub(crate) client: RemoteClient,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    suraksheet::logging::init(suraksheet::logging::level_for_verbosity(cli.verbose))?;

    let dir = match cli.state_dir {
        Some(dir) => dir,
        None => LocalStore::default_dir(&std::env::current_dir().context("get current dir")?),
    };
    let store = LocalStore::open_or_init(&dir)
        .with_context(|| format!("open client state at {}", dir.display()))?;
    let cfg = store.read_config()?;
    let env_url = std::env::var(SERVER_URL_ENV).ok();
    let base_url = cfg.resolve_server_url(cli.server_url.as_deref(), env_url.as_deref());

    let state = AppState::new(store).context("load client state")?;
    let client = RemoteClient::new(base_url, state.token.clone()).context("build http client")?;
    let session = Session { state, client };

    let result = crate::cli_exec::handle_command(&session, cli.command);
    flush_toasts(&session.state);
    result
}

/// Returns a router whose layout loader has run, so bins and the default
/// bin's documents are cached.
pub(crate) fn require_layout(session: &Session) -> Result<Router<'_>> {
    if !session.state.token.is_authenticated() {
        anyhow::bail!("not logged in (run `suraksheet login --token ...`)");
    }
    let mut router = Router::new(&session.state, &session.client);
    match router.navigate("/") {
        Load::Data(_) => Ok(router),
        Load::Error(e) => anyhow::bail!(e),
        Load::Redirect(to) if to == LOGIN_ROUTE => {
            anyhow::bail!("session expired (run `suraksheet login --token ...`)")
        }
        Load::Redirect(to) => anyhow::bail!("redirected to {}", to),
    }
}

fn flush_toasts(state: &AppState) {
    for toast in state.toasts.drain() {
        eprintln!("[{}] {}", toast.kind.as_str(), toast.message);
    }
}
