//! Workspace management for niceutil.
//!
//! This module provides workspace persistence:
//! - The workspace record and its app list
//! - A whole-document JSON store
//! - Lookup of a workspace by id, id prefix or name

pub mod error;
pub mod storage;
pub mod types;

pub use error::WorkspaceError;
pub use storage::{find, FileWorkspaceStore, WorkspaceStore};
pub use types::{Workspace, WorkspaceApp, WorkspaceId};

#[cfg(test)]
pub use storage::MockWorkspaceStore;
