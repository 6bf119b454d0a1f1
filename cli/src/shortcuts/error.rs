//! Shortcut-specific error types.

use thiserror::Error;

/// Errors specific to shortcut bindings.
#[derive(Error, Debug)]
pub enum ShortcutError {
    /// The shortcut text could not be parsed.
    #[error("Invalid shortcut '{0}': {1}. Try something like 'ctrl+opt+1'.")]
    Invalid(String, String),

    /// A stored binding key is not of the form `workspace_<id>`.
    #[error("Unrecognized shortcut name '{0}'")]
    UnknownName(String),

    /// The shortcut is already bound to another workspace.
    #[error("Shortcut {shortcut} is already used by workspace '{workspace}'. Remove it there first.")]
    InUse {
        /// Display form of the shortcut.
        shortcut: String,
        /// Name (or id) of the workspace holding it.
        workspace: String,
    },

    /// Failed to write the binding document.
    #[error("Error saving shortcuts: {0}")]
    Storage(String),
}
