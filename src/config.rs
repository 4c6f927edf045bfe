use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{API_URL_ENV, CONFIG_FILE, DEFAULT_API_URL};
use crate::error::{TicketError, TicketResult};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
}

pub fn config_path() -> TicketResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| TicketError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    }
}

pub fn load_config_from(path: &Path) -> Config {
    if path.exists() {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> TicketResult<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &Config) -> TicketResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// Base URL of the remote ticketing service. Environment variable wins over
/// the config file; falls back to the development default.
pub fn get_api_url() -> String {
    resolve_api_url(env::var(API_URL_ENV).ok(), &load_config())
}

pub fn resolve_api_url(env_override: Option<String>, config: &Config) -> String {
    env_override
        .filter(|url| !url.trim().is_empty())
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
