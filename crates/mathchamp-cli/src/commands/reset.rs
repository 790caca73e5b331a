//! The `mathchamp reset` command.

use std::path::PathBuf;

use anyhow::Result;

use mathchamp_core::store::SessionStore;

use super::open_store;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    if store.path().exists() {
        store.clear()?;
        println!("Saved test discarded.");
    } else {
        println!("No saved test.");
    }
    Ok(())
}
