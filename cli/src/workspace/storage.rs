//! Workspace storage operations.
//!
//! All workspaces live in one JSON document that is read on demand and
//! rewritten wholesale on every mutation:
//! - [`WorkspaceStore`] - Trait for workspace storage operations
//! - [`FileWorkspaceStore`] - JSON file-based storage implementation
//! - [`find`] / [`without`] - lookups over a loaded collection

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::Result;
use crate::workspace::error::WorkspaceError;
use crate::workspace::types::{Workspace, WorkspaceId};

/// File name of the workspace document inside the data directory.
pub const WORKSPACES_FILE: &str = "workspaces.json";

/// Shortest id prefix accepted as a workspace reference.
const MIN_ID_PREFIX: usize = 4;

/// Trait for workspace storage operations (enables mocking).
#[cfg_attr(test, mockall::automock)]
pub trait WorkspaceStore: Send + Sync {
    /// Reads every saved workspace in saved order.
    ///
    /// A missing or undecodable document yields an empty list.
    fn load(&self) -> Vec<Workspace>;

    /// Replaces the stored document with `all`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(&self, all: &[Workspace]) -> Result<()>;

    /// Appends a workspace and rewrites the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn append(&self, workspace: Workspace) -> Result<()> {
        let mut all = self.load();
        all.push(workspace);
        self.save(&all)
    }

    /// Removes the workspace with `id` and rewrites the document.
    ///
    /// Returns the removed workspace, or `None` if no workspace had that id
    /// (in which case nothing is written).
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn remove(&self, id: WorkspaceId) -> Result<Option<Workspace>> {
        let all = self.load();
        let Some(removed) = all.iter().find(|w| w.id == id).cloned() else {
            return Ok(None);
        };
        self.save(&without(all, id))?;
        Ok(Some(removed))
    }
}

/// Returns `all` minus the workspace with `id`, keeping relative order.
#[must_use]
pub fn without(all: Vec<Workspace>, id: WorkspaceId) -> Vec<Workspace> {
    all.into_iter().filter(|w| w.id != id).collect()
}

/// Resolves a user-supplied reference against a loaded collection.
///
/// Tried in order: full id, exact name, unique id prefix (at least 4
/// characters). A name shared by several workspaces is ambiguous.
///
/// # Errors
///
/// Returns [`WorkspaceError::NotFound`] or [`WorkspaceError::Ambiguous`].
pub fn find<'a>(all: &'a [Workspace], reference: &str) -> Result<&'a Workspace> {
    let reference = reference.trim();

    if let Ok(id) = reference.parse::<WorkspaceId>() {
        if let Some(ws) = all.iter().find(|w| w.id == id) {
            return Ok(ws);
        }
    }

    let by_name: Vec<&Workspace> = all.iter().filter(|w| w.name == reference).collect();
    match by_name.as_slice() {
        [ws] => return Ok(ws),
        [] => {}
        many => {
            return Err(WorkspaceError::Ambiguous {
                name: reference.to_string(),
                count: many.len(),
            }
            .into())
        }
    }

    if reference.len() >= MIN_ID_PREFIX {
        let mut by_prefix = all.iter().filter(|w| w.id.matches_prefix(reference));
        if let (Some(ws), None) = (by_prefix.next(), by_prefix.next()) {
            return Ok(ws);
        }
    }

    Err(WorkspaceError::NotFound(reference.to_string()).into())
}

/// File-based workspace storage implementation.
pub struct FileWorkspaceStore {
    path: PathBuf,
}

impl FileWorkspaceStore {
    /// Creates a store whose document lives in `data_dir`.
    ///
    /// The directory is created if missing; failure to create it is not an
    /// error here; it surfaces on the first save instead.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        if !data_dir.exists() {
            if let Err(e) = fs::create_dir_all(data_dir) {
                warn!("Could not create {}: {e}", data_dir.display());
            }
        }
        Self {
            path: data_dir.join(WORKSPACES_FILE),
        }
    }

    /// Path of the workspace document.
    #[cfg(test)]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

}

/// Replaces `path` with `contents` through a synced temp file in the same
/// directory, so readers see either the old or the new document.
///
/// # Errors
///
/// Returns an error if the temp file cannot be created, written or renamed.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

impl WorkspaceStore for FileWorkspaceStore {
    fn load(&self) -> Vec<Workspace> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No workspaces read from {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        serde_json::from_slice(&contents).unwrap_or_else(|e| {
            warn!(
                "Ignoring unreadable workspace file {}: {e}",
                self.path.display()
            );
            Vec::new()
        })
    }

    fn save(&self, all: &[Workspace]) -> Result<()> {
        let json = serde_json::to_vec(all)?;
        write_atomically(&self.path, &json)
            .map_err(|e| WorkspaceError::Storage(e.to_string()))?;
        debug!("Wrote {} workspace(s) to {}", all.len(), self.path.display());
        Ok(())
    }
}
