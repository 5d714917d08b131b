use anyhow::{Context, Result};

use super::{Store, Subscription};
use crate::store::LocalStore;

/// Bearer token kept in sync with `state.json`. Writes hit disk first.
#[derive(Clone, Debug)]
pub struct TokenStore {
    value: Store<String>,
    storage: LocalStore,
}

impl TokenStore {
    pub fn load(storage: LocalStore) -> Result<Self> {
        let token = storage.get_token().context("read stored token")?;
        Ok(Self {
            value: Store::new(token),
            storage,
        })
    }

    pub fn get(&self) -> String {
        self.value.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.value.with(|t| !t.is_empty())
    }

    pub fn set(&self, token: &str) -> Result<()> {
        self.storage
            .set_token(token)
            .context("persist token")?;
        self.value.set(token.to_string());
        Ok(())
    }

    pub fn update(&self, f: impl FnOnce(&str) -> String) -> Result<()> {
        let next = self.value.with(|t| f(t));
        self.set(&next)
    }

    pub fn clear(&self) -> Result<()> {
        self.set("")
    }

    /// Pulls the persisted token back into memory, e.g. after another
    /// process logged in with the same state directory.
    pub fn reload(&self) -> Result<()> {
        let token = self.storage.get_token().context("reload stored token")?;
        if self.value.with(|t| *t != token) {
            self.value.set(token);
        }
        Ok(())
    }

    pub fn subscribe(&self, f: impl Fn(&String) + Send + Sync + 'static) -> Subscription {
        self.value.subscribe(f)
    }

    pub fn storage(&self) -> &LocalStore {
        &self.storage
    }
}

#[cfg(test)]
#[path = "../tests/state/token_tests.rs"]
mod tests;
