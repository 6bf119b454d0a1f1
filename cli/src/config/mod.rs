//! Configuration management for niceutil.

pub mod paths;
pub mod settings;

pub use paths::config_file;
pub use settings::{CaptureConfig, DesktopConfig, LaunchConfig, NiceConfig};

use std::path::Path;

use crate::error::{NiceError, Result};

/// Load configuration from the default config file.
///
/// If the config file doesn't exist, returns default configuration.
pub fn load_config() -> Result<NiceConfig> {
    let path = config_file()?;
    load_config_from(&path)
}

/// Load configuration from a specific path.
///
/// If the file doesn't exist, returns default configuration.
pub fn load_config_from(path: &Path) -> Result<NiceConfig> {
    if !path.exists() {
        return Ok(NiceConfig::default().with_env_overrides());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: NiceConfig =
        toml::from_str(&contents).map_err(|e| NiceError::ConfigRead(e.to_string()))?;

    Ok(config.with_env_overrides())
}

/// Render configuration as TOML.
pub fn render_config(config: &NiceConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| NiceError::ConfigWrite(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.launch, LaunchConfig::default());
        assert_eq!(config.capture, CaptureConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[capture\nmin_window_width = ").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(NiceError::ConfigRead(_))
        ));
    }

    #[test]
    fn rendered_config_parses_back() {
        let config = NiceConfig::default();
        let text = render_config(&config).unwrap();
        let parsed: NiceConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
