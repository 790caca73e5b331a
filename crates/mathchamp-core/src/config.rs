//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level mathchamp configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathChampConfig {
    /// Questions per test when none is requested.
    #[serde(default = "default_question_count")]
    pub default_question_count: u32,
    /// Where the in-progress session is cached.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
    /// Output directory for exported results.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Seed for reproducible question generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_question_count() -> u32 {
    10
}
fn default_state_file() -> PathBuf {
    PathBuf::from(".mathchamp/session.json")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./mathchamp-results")
}

impl Default for MathChampConfig {
    fn default() -> Self {
        Self {
            default_question_count: default_question_count(),
            state_file: default_state_file(),
            output_dir: default_output_dir(),
            seed: None,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `mathchamp.toml` in the current directory
/// 2. `~/.config/mathchamp/config.toml`
///
/// Environment variable overrides: `MATHCHAMP_STATE_FILE`, `MATHCHAMP_SEED`.
pub fn load_config() -> Result<MathChampConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<MathChampConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathchamp.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => MathChampConfig::default(),
    };

    apply_env_overrides(
        &mut config,
        std::env::var("MATHCHAMP_STATE_FILE").ok(),
        std::env::var("MATHCHAMP_SEED").ok(),
    );

    anyhow::ensure!(
        config.default_question_count >= 1,
        "default_question_count must be at least 1"
    );

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<MathChampConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<MathChampConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn apply_env_overrides(
    config: &mut MathChampConfig,
    state_file: Option<String>,
    seed: Option<String>,
) {
    if let Some(state_file) = state_file.filter(|s| !s.trim().is_empty()) {
        config.state_file = PathBuf::from(state_file);
    }
    if let Some(seed) = seed {
        match seed.trim().parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => tracing::warn!("ignoring MATHCHAMP_SEED={seed:?}: not an unsigned integer"),
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathchamp"))
}
