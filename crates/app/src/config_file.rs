//! Optional TOML configuration read once at startup.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use maze_core::SimConfig;

use crate::APP_NAME;

pub const CONFIG_ENV_VAR: &str = "RAYMAZE_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push(CONFIG_FILE_NAME);
        path
    })
}

/// Command line first, then the environment override, then the platform default.
pub fn resolve_config_path(cli_path: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|value| !value.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }
    default_config_path()
}

pub fn parse_config(text: &str) -> Result<SimConfig> {
    SimConfig::from_toml(text).context("invalid config file")
}

/// `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<SimConfig>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    parse_config(&text).with_context(|| format!("in {}", path.display())).map(Some)
}

/// Loads the resolved config file, falling back to defaults on any problem.
pub fn load_config_or_default(cli_path: Option<&Path>) -> SimConfig {
    let env_value = env::var(CONFIG_ENV_VAR).ok();
    let Some(path) = resolve_config_path(cli_path, env_value.as_deref()) else {
        log::info!("no config directory available, using defaults");
        return SimConfig::default();
    };
    match load_config(&path) {
        Ok(Some(config)) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Ok(None) => {
            log::debug!("no config at {}, using defaults", path.display());
            SimConfig::default()
        }
        Err(err) => {
            log::warn!("{err:#}; using defaults");
            SimConfig::default()
        }
    }
}
