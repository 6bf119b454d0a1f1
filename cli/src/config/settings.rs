//! Application configuration settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::paths::default_data_dir;
use crate::error::Result;

/// Main configuration for niceutil.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NiceConfig {
    /// Where data files live.
    pub storage: StorageConfig,
    /// Current-space capture heuristic.
    pub capture: CaptureConfig,
    /// How apps are reopened.
    pub launch: LaunchConfig,
    /// Host backend selection.
    pub desktop: DesktopConfig,
    /// Space indicator refresh.
    pub indicator: IndicatorConfig,
}

/// Storage location settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the per-user application support directory.
    pub data_dir: Option<PathBuf>,
}

/// Thresholds deciding whether an app is on the current space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// A window must be strictly wider than this.
    pub min_window_width: f64,
    /// A window must be strictly taller than this.
    pub min_window_height: f64,
    /// Window layer of ordinary app windows.
    pub main_window_layer: i64,
    /// Apps whose bundle id contains any of these are never captured.
    pub excluded_bundle_ids: Vec<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            min_window_width: 50.0,
            min_window_height: 50.0,
            main_window_layer: 0,
            excluded_bundle_ids: vec!["com.apple.finder".to_string(), "NiceUtil".to_string()],
        }
    }
}

/// Launch behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Bring launched apps to the foreground.
    pub activates: bool,
    /// Open a new instance even when the app is already running, so each
    /// saved entry reproduces a window.
    pub new_instance: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            activates: true,
            new_instance: true,
        }
    }
}

/// Host backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// `auto`, `macos` or `hyprland`.
    pub backend: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            backend: "auto".to_string(),
        }
    }
}

/// Space indicator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Polling interval for `space --watch`, in milliseconds.
    pub refresh_interval_ms: u64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 1000,
        }
    }
}

/// Environment variables that can override configuration.
pub mod env {
    pub const DATA_DIR: &str = "NICEUTIL_DATA_DIR";
    pub const BACKEND: &str = "NICEUTIL_BACKEND";
    pub const LOG_LEVEL: &str = "NICEUTIL_LOG";
}

impl NiceConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = std::env::var_os(env::DATA_DIR) {
            if !dir.is_empty() {
                self.storage.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(backend) = std::env::var(env::BACKEND) {
            if !backend.trim().is_empty() {
                self.desktop.backend = backend.trim().to_lowercase();
            }
        }

        self
    }

    /// Directory holding the workspace and shortcut documents.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}
