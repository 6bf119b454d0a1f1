//! Keyboard shortcut bindings for workspaces.
//!
//! Recording keystrokes and listening for them globally belongs to the host
//! UI; this module owns the parsed shortcut and the id-to-binding store.

pub mod error;
pub mod storage;
pub mod types;

pub use error::ShortcutError;
pub use storage::{FileShortcutStore, ShortcutStore};
pub use types::{Shortcut, ShortcutName};

#[cfg(test)]
pub use storage::MockShortcutStore;
