//! Shortcut binding storage.
//!
//! Bindings live in their own document next to the workspace store, keyed
//! by [`ShortcutName`]. A workspace record never carries its shortcut.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::shortcuts::error::ShortcutError;
use crate::shortcuts::types::{Shortcut, ShortcutName};
use crate::workspace::storage::write_atomically;
use crate::workspace::WorkspaceId;

/// File name of the binding document inside the data directory.
pub const SHORTCUTS_FILE: &str = "shortcuts.json";

/// Typed association from workspace id to its optional shortcut.
#[cfg_attr(test, mockall::automock)]
pub trait ShortcutStore: Send + Sync {
    /// Every stored binding.
    ///
    /// A missing or undecodable document yields no bindings.
    fn all(&self) -> BTreeMap<ShortcutName, Shortcut>;

    /// The shortcut bound to `id`, if any.
    fn get(&self, id: WorkspaceId) -> Option<Shortcut> {
        self.all().remove(&ShortcutName::from(id))
    }

    /// Binds `shortcut` to `id`, replacing any previous binding of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::InUse`] if another workspace holds the
    /// shortcut, or an error if the document cannot be written.
    fn record(&self, id: WorkspaceId, shortcut: Shortcut) -> Result<()>;

    /// Removes the binding of `id`. Removing a missing binding is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn reset(&self, id: WorkspaceId) -> Result<()>;
}

/// File-based shortcut storage implementation.
pub struct FileShortcutStore {
    path: PathBuf,
}

impl FileShortcutStore {
    /// Creates a store whose document lives in `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SHORTCUTS_FILE),
        }
    }

    /// Path of the binding document.
    #[cfg(test)]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, bindings: &BTreeMap<ShortcutName, Shortcut>) -> Result<()> {
        let json = serde_json::to_vec_pretty(bindings)?;
        write_atomically(&self.path, &json)
            .map_err(|e| ShortcutError::Storage(e.to_string()).into())
    }
}

impl ShortcutStore for FileShortcutStore {
    fn all(&self) -> BTreeMap<ShortcutName, Shortcut> {
        let Ok(contents) = fs::read(&self.path) else {
            return BTreeMap::new();
        };

        serde_json::from_slice(&contents).unwrap_or_else(|e| {
            warn!("Ignoring unreadable shortcut file {}: {e}", self.path.display());
            BTreeMap::new()
        })
    }

    fn record(&self, id: WorkspaceId, shortcut: Shortcut) -> Result<()> {
        let name = ShortcutName::from(id);
        let mut bindings = self.all();

        if let Some((holder, _)) = bindings
            .iter()
            .find(|(holder, bound)| **bound == shortcut && **holder != name)
        {
            return Err(ShortcutError::InUse {
                shortcut: shortcut.to_string(),
                workspace: holder.workspace().to_string(),
            }
            .into());
        }

        debug!("Binding {shortcut} to {name}");
        bindings.insert(name, shortcut);
        self.write(&bindings)
    }

    fn reset(&self, id: WorkspaceId) -> Result<()> {
        let mut bindings = self.all();
        if bindings.remove(&ShortcutName::from(id)).is_none() {
            return Ok(());
        }
        self.write(&bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NiceError;
    use tempfile::TempDir;

    fn shortcut(text: &str) -> Shortcut {
        text.parse().unwrap()
    }

    #[test]
    fn missing_binding_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileShortcutStore::new(temp_dir.path());

        assert!(store.get(WorkspaceId::new()).is_none());
        assert!(store.all().is_empty());
    }

    #[test]
    fn record_get_and_reset() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileShortcutStore::new(temp_dir.path());
        let id = WorkspaceId::new();

        store.record(id, shortcut("ctrl+opt+1")).unwrap();
        assert_eq!(store.get(id), Some(shortcut("ctrl+opt+1")));

        store.record(id, shortcut("ctrl+opt+2")).unwrap();
        assert_eq!(store.get(id), Some(shortcut("ctrl+opt+2")));

        store.reset(id).unwrap();
        assert!(store.get(id).is_none());
    }

    #[test]
    fn reset_without_binding_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileShortcutStore::new(temp_dir.path());

        store.reset(WorkspaceId::new()).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn rejects_shortcut_held_by_another_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileShortcutStore::new(temp_dir.path());
        let first = WorkspaceId::new();
        let second = WorkspaceId::new();

        store.record(first, shortcut("cmd+shift+1")).unwrap();
        let err = store.record(second, shortcut("cmd+shift+1")).unwrap_err();

        assert!(matches!(
            err,
            NiceError::Shortcut(ShortcutError::InUse { .. })
        ));
        assert!(store.get(second).is_none());
    }

    #[test]
    fn document_is_keyed_by_shortcut_name() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileShortcutStore::new(temp_dir.path());
        let id: WorkspaceId = "e621e1f8-c36c-495a-93fc-0c247a3e6e5f".parse().unwrap();

        store.record(id, shortcut("ctrl+opt+1")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({"workspace_E621E1F8-C36C-495A-93FC-0C247A3E6E5F": "⌃⌥1"})
        );
    }

    #[test]
    fn unwritable_location_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "file in the way").unwrap();
        let store = FileShortcutStore::new(&blocker);

        let err = store.record(WorkspaceId::new(), shortcut("ctrl+opt+1")).unwrap_err();
        assert!(matches!(err, NiceError::Shortcut(ShortcutError::Storage(_))));
    }

    #[test]
    fn corrupted_document_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileShortcutStore::new(temp_dir.path());
        fs::write(store.path(), "[1, 2").unwrap();

        assert!(store.all().is_empty());
    }
}
