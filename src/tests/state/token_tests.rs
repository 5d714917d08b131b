use std::sync::{Arc, Mutex};

use super::*;

fn token_store(dir: &tempfile::TempDir) -> Result<TokenStore> {
    TokenStore::load(LocalStore::init(dir.path(), false)?)
}

#[test]
fn starts_from_the_persisted_value() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = LocalStore::init(dir.path(), false)?;
    storage.set_token("persisted")?;

    let tokens = TokenStore::load(storage)?;
    assert_eq!(tokens.get(), "persisted");
    assert!(tokens.is_authenticated());
    Ok(())
}

#[test]
fn defaults_to_unauthenticated() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let tokens = token_store(&dir)?;
    assert_eq!(tokens.get(), "");
    assert!(!tokens.is_authenticated());
    Ok(())
}

#[test]
fn set_and_clear_write_through_to_storage() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let tokens = token_store(&dir)?;

    tokens.set("abc")?;
    assert_eq!(LocalStore::open(dir.path())?.get_token()?, "abc");

    tokens.update(|t| format!("{}-2", t))?;
    assert_eq!(tokens.get(), "abc-2");
    assert_eq!(tokens.storage().get_token()?, "abc-2");

    tokens.clear()?;
    assert_eq!(LocalStore::open(dir.path())?.get_token()?, "");
    Ok(())
}

#[test]
fn reload_picks_up_external_writes_and_notifies() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let tokens = token_store(&dir)?;
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = tokens.subscribe(move |t| sink.lock().unwrap().push(t.clone()));

    LocalStore::open(dir.path())?.set_token("from-elsewhere")?;
    tokens.reload()?;
    tokens.reload()?;

    assert_eq!(tokens.get(), "from-elsewhere");
    assert_eq!(*seen.lock().unwrap(), vec!["from-elsewhere".to_string()]);
    Ok(())
}
