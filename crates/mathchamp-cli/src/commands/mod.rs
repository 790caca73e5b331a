pub mod init;
pub mod print;
pub mod reset;
pub mod results;
pub mod take;

use std::path::PathBuf;

use anyhow::Result;

use mathchamp_core::config::{load_config_from, MathChampConfig};
use mathchamp_core::store::JsonFileStore;

/// Load config and open the session store it points at.
pub(crate) fn open_store(config_path: Option<PathBuf>) -> Result<(MathChampConfig, JsonFileStore)> {
    let config = load_config_from(config_path.as_deref())?;
    let store = JsonFileStore::new(config.state_file.clone());
    Ok((config, store))
}
