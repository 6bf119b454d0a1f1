//! Error types and result aliases for niceutil.
//!
//! Errors here are the "hard" tier: anything that reaches `main` is shown to
//! the user once as a blocking alert. Soft failures (an unreadable store, a
//! missing shortcut binding) never become a [`NiceError`]; they are logged
//! and normalized to an empty value at the point where they occur.

use thiserror::Error;

use crate::desktop::DesktopError;
use crate::launcher::LaunchReport;
use crate::shortcuts::ShortcutError;
use crate::workspace::WorkspaceError;

/// Main error type for niceutil operations.
#[derive(Error, Debug)]
pub enum NiceError {
    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions and format.")]
    ConfigRead(String),

    /// Failed to write configuration file.
    #[error("Failed to write configuration file: {0}. Check directory permissions.")]
    ConfigWrite(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON or TOML serialization/deserialization failed.
    #[error("Data serialization error: {0}. This may indicate corrupted data.")]
    Serialization(String),

    /// One or more applications of a workspace failed to open.
    #[error("{}", .0.message())]
    LaunchFailed(LaunchReport),

    /// Workspace operation error.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// Shortcut binding error.
    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    /// Window/space query error.
    #[error(transparent)]
    Desktop(#[from] DesktopError),
}

/// Result type alias using [`NiceError`].
pub type Result<T> = std::result::Result<T, NiceError>;

impl From<serde_json::Error> for NiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {err}"))
    }
}

impl From<toml::de::Error> for NiceError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigRead(format!("TOML parse error: {err}"))
    }
}

impl From<toml::ser::Error> for NiceError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigWrite(format!("TOML serialize error: {err}"))
    }
}

impl From<tempfile::PersistError> for NiceError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::LaunchFailure;

    #[test]
    fn launch_failure_message_names_every_app() {
        let report = LaunchReport {
            attempted: 3,
            failures: vec![
                LaunchFailure {
                    app_path: "file:///Applications/Notes.app/".to_string(),
                    label: "Notes.app".to_string(),
                    reason: "not found".to_string(),
                },
                LaunchFailure {
                    app_path: "::bad::".to_string(),
                    label: "::bad::".to_string(),
                    reason: "invalid location".to_string(),
                },
            ],
        };

        let err = NiceError::LaunchFailed(report);
        assert_eq!(err.to_string(), "Failed to launch: Notes.app, ::bad::");
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: NiceError = json_err.into();
        assert!(matches!(err, NiceError::Serialization(_)));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: NiceError = io_err.into();
        assert!(matches!(err, NiceError::Io(_)));
    }

    #[test]
    fn workspace_errors_are_transparent() {
        let err: NiceError = WorkspaceError::NotFound("work".to_string()).into();
        assert_eq!(err.to_string(), "Workspace 'work' not found.");
    }
}
