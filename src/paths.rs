//! Common paths for Chirp data storage
//!
//! Chirp keeps its configuration under ~/.config/chirp/ on all platforms.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the Chirp directory (~/.config/chirp/)
///
/// This is consistent across all platforms for simplicity.
pub fn chirp_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("chirp"))
}

/// Get the config file path (~/.config/chirp/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(chirp_dir()?.join("config.toml"))
}
