//! Command implementations.

pub mod config;
pub mod shortcut;
pub mod space;
pub mod workspace;

pub use config::{handle_completions, handle_config_path, handle_config_show};
pub use shortcut::{handle_shortcut_list, handle_shortcut_remove, handle_shortcut_set};
pub use space::handle_space;
pub use workspace::{handle_delete, handle_list, handle_load, handle_save, handle_show};
