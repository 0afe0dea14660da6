//! Configuration module for headergen-rs
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Global settings instance
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "HEADERGEN_SETTINGS_PATH";

/// Install already loaded settings as the global instance
pub fn init(settings: Settings) -> Result<()> {
    SETTINGS
        .set(settings)
        .map_err(|_| anyhow::anyhow!("Settings already initialized"))?;
    Ok(())
}

/// Load a settings file, apply environment overrides and validate the result
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

/// Initialize global settings from a file
pub fn init_from_file<P: AsRef<Path>>(path: P) -> Result<()> {
    init(load_file(path)?)
}

/// Initialize global settings with defaults
pub fn init_default() -> Result<()> {
    init(Settings::default())
}

/// Get a reference to the global settings
pub fn get() -> &'static Settings {
    SETTINGS.get().expect("Settings not initialized")
}

/// Check if settings have been initialized
pub fn is_initialized() -> bool {
    SETTINGS.get().is_some()
}

/// Candidate settings files, in lookup order
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from("headergen.yml"));
    paths.push(PathBuf::from("config/headergen.yml"));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("headergen-rs/headergen.yml"));
    }
    paths
}

/// First existing settings file, if any
pub fn find_settings_file() -> Option<PathBuf> {
    search_paths().into_iter().find(|path| path.exists())
}
