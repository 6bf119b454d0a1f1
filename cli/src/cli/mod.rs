//! CLI module for niceutil.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigCommands, ShortcutCommands};
