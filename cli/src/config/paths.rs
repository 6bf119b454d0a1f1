//! Platform-specific path utilities for niceutil.

use std::path::PathBuf;

use crate::error::{NiceError, Result};

/// Name of the per-user application directory.
pub const APP_DIR_NAME: &str = "NiceUtil";

/// Get the configuration directory for niceutil.
///
/// - Linux: `~/.config/NiceUtil`
/// - macOS: `~/Library/Application Support/NiceUtil`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| NiceError::Config("Cannot determine config directory".to_string()))?;
    Ok(base.join(APP_DIR_NAME))
}

/// Get the default data directory, where workspaces and shortcuts are kept.
///
/// - Linux: `~/.local/share/NiceUtil`
/// - macOS: `~/Library/Application Support/NiceUtil`
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| NiceError::Config("Cannot determine data directory".to_string()))?;
    Ok(base.join(APP_DIR_NAME))
}

/// Get the main configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
