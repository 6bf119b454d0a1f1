//! Command-line argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

/// Save the apps on your current desktop space as a named workspace and
/// relaunch them later.
#[derive(Parser, Debug)]
#[command(name = "niceutil")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the apps on the current space as a new workspace.
    ///
    /// Apps count as "on this space" when they own a visible window larger
    /// than 50x50. If none qualify you are offered to save every running
    /// app instead.
    Save {
        /// Name for the workspace.
        name: String,

        /// Save every running app instead of only those on this space.
        #[arg(short, long)]
        all: bool,

        /// Answer yes to the fallback prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List saved workspaces with their shortcuts.
    List,

    /// Show the apps recorded in a workspace.
    Show {
        /// Workspace name or id.
        workspace: String,
    },

    /// Relaunch every app of a workspace.
    ///
    /// Each app is opened as a new instance, even if it is already running.
    Load {
        /// Workspace name or id.
        workspace: String,
    },

    /// Delete a workspace and its shortcut.
    Delete {
        /// Workspace name or id.
        workspace: String,

        /// Skip confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Manage workspace keyboard shortcuts.
    Shortcut {
        #[command(subcommand)]
        command: ShortcutCommands,
    },

    /// Show the current space indicator.
    Space {
        /// Keep running and print the indicator whenever it changes.
        #[arg(short, long)]
        watch: bool,
    },

    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: ShellType,
    },
}

/// Shortcut subcommands.
#[derive(Subcommand, Debug)]
pub enum ShortcutCommands {
    /// Bind a shortcut to a workspace (add or edit).
    Set {
        /// Workspace name or id.
        workspace: String,

        /// Key combination, e.g. `ctrl+opt+1` or `cmd+shift+k`.
        keys: String,
    },

    /// Remove a workspace's shortcut.
    Remove {
        /// Workspace name or id.
        workspace: String,
    },

    /// List all bound shortcuts.
    List,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,

    /// Print the configuration and data file locations.
    Path,
}

/// Supported shell types for completions.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_save_with_flags() {
        let cli = Cli::try_parse_from(["niceutil", "save", "Reading", "--all", "-y"]).unwrap();
        match cli.command {
            Commands::Save { name, all, yes } => {
                assert_eq!(name, "Reading");
                assert!(all);
                assert!(yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_shortcut_set() {
        let cli =
            Cli::try_parse_from(["niceutil", "shortcut", "set", "Mail", "ctrl+opt+1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Shortcut {
                command: ShortcutCommands::Set { .. }
            }
        ));
    }
}
