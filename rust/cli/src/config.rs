//! CLI configuration: an optional TOML file plus environment overrides.
//!
//! Seed precedence is `--seed` flag > `PARLOR_SEED` environment variable >
//! `default_seed` in the config file. The config file is looked up via
//! `PARLOR_CONFIG`, falling back to `./parlor.toml` when present.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

pub const CONFIG_ENV: &str = "PARLOR_CONFIG";
pub const SEED_ENV: &str = "PARLOR_SEED";
const DEFAULT_CONFIG_FILE: &str = "parlor.toml";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Seed used when neither `--seed` nor `PARLOR_SEED` is given.
    pub default_seed: Option<u64>,
}

impl CliConfig {
    pub fn load() -> Result<Self, CliError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Resolves the seed a command should use, or `None` when nothing was
/// configured anywhere; callers then fall back to a random seed.
pub fn resolve_seed(flag: Option<u64>) -> Result<Option<u64>, CliError> {
    if flag.is_some() {
        return Ok(flag);
    }
    if let Ok(raw) = std::env::var(SEED_ENV) {
        let parsed = raw.parse::<u64>().map_err(|_| {
            CliError::Config(format!(
                "{} must be an unsigned integer, got {:?}",
                SEED_ENV, raw
            ))
        })?;
        return Ok(Some(parsed));
    }
    Ok(CliConfig::load()?.default_seed)
}
