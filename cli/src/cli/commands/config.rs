//! Configuration and shell-integration command handlers.

use crate::cli::args::ShellType;
use crate::config::{config_file, render_config, NiceConfig};
use crate::error::Result;
use crate::shortcuts::storage::SHORTCUTS_FILE;
use crate::workspace::storage::WORKSPACES_FILE;

/// Handles the `niceutil config show` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be rendered.
pub fn handle_config_show(config: &NiceConfig) -> Result<()> {
    print!("{}", render_config(config)?);
    Ok(())
}

/// Handles the `niceutil config path` command.
///
/// # Errors
///
/// Returns an error if the per-user directories cannot be determined.
pub fn handle_config_path(config: &NiceConfig) -> Result<()> {
    let data_dir = config.data_dir()?;
    println!("Config:     {}", config_file()?.display());
    println!("Workspaces: {}", data_dir.join(WORKSPACES_FILE).display());
    println!("Shortcuts:  {}", data_dir.join(SHORTCUTS_FILE).display());
    Ok(())
}

/// Handles the `niceutil completions <shell>` command.
pub fn handle_completions(shell: ShellType) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell};

    let mut cmd = crate::cli::Cli::command();
    let shell = match shell {
        ShellType::Bash => Shell::Bash,
        ShellType::Zsh => Shell::Zsh,
        ShellType::Fish => Shell::Fish,
    };

    generate(shell, &mut cmd, "niceutil", &mut std::io::stdout());

    Ok(())
}
