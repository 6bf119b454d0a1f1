//! Desktop query error types.

use thiserror::Error;

/// Errors raised while querying the host for apps, windows or spaces.
#[derive(Error, Debug, Clone)]
pub enum DesktopError {
    /// No backend is available on this host.
    #[error("No desktop backend for this system. Set desktop.backend to 'macos' or 'hyprland' in the config.")]
    Unsupported,

    /// The backend name in the configuration is not recognized.
    #[error("Unknown desktop backend '{0}'. Expected 'auto', 'macos' or 'hyprland'.")]
    UnknownBackend(String),

    /// The host tool could not be run or exited with an error.
    #[error("'{tool}' failed: {message}")]
    CommandFailed {
        /// Program that was invoked.
        tool: String,
        /// Its stderr or spawn error.
        message: String,
    },

    /// The host tool's output could not be decoded.
    #[error("Unexpected output from '{tool}': {message}")]
    Decode {
        /// Program that was invoked.
        tool: String,
        /// Decoder error.
        message: String,
    },
}
