use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, ClientState};

pub const STORE_DIR: &str = ".suraksheet";
pub const HOME_ENV: &str = "SURAKSHEET_HOME";

/// Durable client storage: `config.json` plus `state.json` (which holds the token).
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn default_dir(cwd: &Path) -> PathBuf {
        cwd.join(STORE_DIR)
    }

    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(anyhow!(
                "No client state directory found at {} (run `suraksheet login`)",
                root.display()
            ));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn init(root: &Path, force: bool) -> Result<Self> {
        if root.join("config.json").exists() && !force {
            return Err(anyhow!(
                "client state already exists at {} (use --force to re-init)",
                root.display()
            ));
        }
        fs::create_dir_all(root).context("create state dir")?;

        let store = Self {
            root: root.to_path_buf(),
        };
        store
            .write_config(&ClientConfig::default())
            .context("write config.json")?;
        store
            .write_state(&ClientState::default())
            .context("write state.json")?;
        Ok(store)
    }

    pub fn open_or_init(root: &Path) -> Result<Self> {
        if root.join("config.json").exists() {
            Self::open(root)
        } else {
            Self::init(root, false)
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported client config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<ClientState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(ClientState::default());
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: ClientState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported client state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &ClientState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }

    pub fn get_token(&self) -> Result<String> {
        Ok(self.read_state()?.token)
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.token = token.to_string();
        self.write_state(&st)
    }

    pub fn clear_token(&self) -> Result<()> {
        self.set_token("")
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
