//! Workspace-specific error types.

use thiserror::Error;

/// Errors specific to workspace operations.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// No workspace matches the given name or id.
    #[error("Workspace '{0}' not found.")]
    NotFound(String),

    /// Several workspaces share the given name.
    #[error("{count} workspaces are named '{name}'. Refer to one by id instead (see 'niceutil list').")]
    Ambiguous {
        /// The name that matched more than once.
        name: String,
        /// Number of matches.
        count: usize,
    },

    /// Invalid workspace name.
    #[error("Invalid workspace name '{0}': {1}")]
    InvalidName(String, String),

    /// The active desktop space could not be determined.
    #[error("Could not determine the current desktop space. The workspace was not saved.")]
    NoActiveSpace,

    /// Failed to write the workspace document.
    #[error("Error saving workspaces: {0}")]
    Storage(String),
}
