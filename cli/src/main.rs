//! NiceUtil - named workspaces of running apps
//!
//! Save the apps visible on the current desktop space under a name,
//! relaunch them later (optionally from a keyboard shortcut), and show
//! which space is active.

mod app;
mod cli;
mod config;
mod desktop;
mod error;
mod launcher;
mod shortcuts;
mod workspace;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::{AppContext, Presenter, TerminalPresenter};
use crate::cli::{Cli, Commands, ConfigCommands, ShortcutCommands};
use crate::config::settings::env;
use crate::error::Result;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_LEVEL)
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Run the command; hard failures are shown once
    if let Err(e) = run(cli).await {
        TerminalPresenter { assume_yes: false }.alert(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let assume_yes = match &cli.command {
        Commands::Completions { shell } => return cli::commands::handle_completions(*shell),
        Commands::Save { yes, .. } | Commands::Delete { yes, .. } => *yes,
        _ => false,
    };

    let config = config::load_config()?;
    let ctx = AppContext::from_config(config, assume_yes)?;

    match cli.command {
        Commands::Save { name, all, .. } => cli::commands::handle_save(&ctx, name, all).await,
        Commands::List => cli::commands::handle_list(&ctx),
        Commands::Show { workspace } => cli::commands::handle_show(&ctx, &workspace),
        Commands::Load { workspace } => cli::commands::handle_load(&ctx, &workspace).await,
        Commands::Delete { workspace, .. } => cli::commands::handle_delete(&ctx, &workspace),
        Commands::Shortcut { command } => match command {
            ShortcutCommands::Set { workspace, keys } => {
                cli::commands::handle_shortcut_set(&ctx, &workspace, &keys)
            }
            ShortcutCommands::Remove { workspace } => {
                cli::commands::handle_shortcut_remove(&ctx, &workspace)
            }
            ShortcutCommands::List => cli::commands::handle_shortcut_list(&ctx),
        },
        Commands::Space { watch } => cli::commands::handle_space(&ctx, watch).await,
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::commands::handle_config_show(ctx.config()),
            ConfigCommands::Path => cli::commands::handle_config_path(ctx.config()),
        },
        Commands::Completions { shell } => cli::commands::handle_completions(shell),
    }
}
