//! Configuration loading
//!
//! Reads `~/.config/hovertip/config.toml`. A missing file is not an error:
//! every setting has a default.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_GRACE_MS, DEFAULT_SHOW_DELAY_MS, TooltipConfig};

use crate::error::HovertipError;

const CONFIG_DIR: &str = "hovertip";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user's configuration, using defaults when no file exists
pub fn load_config() -> Result<Config, HovertipError> {
    let path = config_path().ok_or(HovertipError::NoConfigDir)?;
    load_config_at(&path)
}

fn load_config_at(path: &Path) -> Result<Config, HovertipError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

/// Load an explicitly named configuration file; a missing file is an error
pub fn load_config_from_path(path: &Path) -> Result<Config, HovertipError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Like [`load_config`], but logs and falls back to defaults on any error
pub fn load_config_or_default() -> Config {
    or_default(load_config())
}

fn or_default(loaded: Result<Config, HovertipError>) -> Config {
    loaded.unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    })
}

pub fn parse_config(content: &str) -> Result<Config, HovertipError> {
    Ok(toml::from_str(content)?)
}

pub fn render_config(config: &Config) -> Result<String, HovertipError> {
    Ok(toml::to_string(config)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
