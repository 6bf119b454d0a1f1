//! Workspace command handlers for the niceutil CLI.
//!
//! This module implements the workspace menu actions:
//! - [`handle_save`] - Save the current space as a workspace (`niceutil save`)
//! - [`handle_list`] - List saved workspaces (`niceutil list`)
//! - [`handle_show`] - Show a workspace's apps (`niceutil show`)
//! - [`handle_load`] - Relaunch a workspace (`niceutil load`)
//! - [`handle_delete`] - Delete a workspace (`niceutil delete`)

use tracing::debug;

use crate::app::{AppContext, CaptureScope, SaveOutcome, SaveRequest};
use crate::error::{NiceError, Result};
use crate::launcher::LaunchReport;

/// Handles the `niceutil save <name>` command.
///
/// # Errors
///
/// Returns an error if the name is empty, the host cannot be queried, or
/// the workspace cannot be written.
pub async fn handle_save(ctx: &AppContext, name: String, all: bool) -> Result<()> {
    let scope = if all {
        CaptureScope::AllRunning
    } else {
        CaptureScope::CurrentSpace
    };

    match ctx.save_workspace(SaveRequest { name, scope }).await? {
        SaveOutcome::Saved(ws) => {
            println!("Saved workspace '{}' with {} app(s).", ws.name, ws.apps.len());
            for app in &ws.apps {
                println!("  {}", app.app_path);
            }
        }
        SaveOutcome::Declined => println!("Nothing saved."),
        SaveOutcome::NothingToSave => {
            println!("No running applications to save.");
        }
    }

    Ok(())
}

/// Handles the `niceutil list` command.
pub fn handle_list(ctx: &AppContext) -> Result<()> {
    let menu = ctx.menu();

    if menu.is_empty() {
        println!("No workspaces saved yet.");
        println!("\nCreate one with: niceutil save <name>");
        return Ok(());
    }

    println!("Saved workspaces:\n");
    for entry in menu {
        let ws = &entry.workspace;
        match &entry.shortcut {
            Some(shortcut) => println!("  {}    {shortcut}", ws.name),
            None => println!("  {}", ws.name),
        }
        println!("    Id: {}", ws.id);
        println!("    Apps: {}", ws.apps.len());
        let titles: Vec<&str> = entry.actions.iter().map(|a| a.title()).collect();
        println!("    Actions: {}", titles.join(", "));
        println!();
    }

    Ok(())
}

/// Handles the `niceutil show <workspace>` command.
///
/// # Errors
///
/// Returns an error if the workspace cannot be resolved.
pub fn handle_show(ctx: &AppContext, reference: &str) -> Result<()> {
    let ws = ctx.resolve(reference)?;
    let shortcut = ctx.shortcut(&ws);

    println!("Workspace: {}", ws.name);
    println!("  Id: {}", ws.id);
    match shortcut {
        Some(shortcut) => println!("  Shortcut: {shortcut}"),
        None => println!("  Shortcut: none"),
    }
    println!("  Apps:");
    for app in &ws.apps {
        println!("    {} (space {})", app.app_path, app.space_number);
    }

    Ok(())
}

/// Handles the `niceutil load <workspace>` command.
///
/// # Errors
///
/// Returns an error if the workspace cannot be resolved, or one combined
/// [`NiceError::LaunchFailed`] if any app did not open.
pub async fn handle_load(ctx: &AppContext, reference: &str) -> Result<()> {
    let (ws, report) = ctx.load_workspace(reference).await?;
    print_launch_summary(&ws.name, &report);

    if report.is_success() {
        Ok(())
    } else {
        Err(NiceError::LaunchFailed(report))
    }
}

fn print_launch_summary(name: &str, report: &LaunchReport) {
    println!(
        "Launched workspace '{name}': {} of {} app(s) opened.",
        report.succeeded(),
        report.attempted
    );
    for failure in &report.failures {
        debug!("{} could not be opened", failure.app_path);
        println!("  {}: {}", failure.label, failure.reason);
    }
}

/// Handles the `niceutil delete <workspace>` command.
///
/// # Errors
///
/// Returns an error if the workspace cannot be resolved or the store
/// cannot be written.
pub fn handle_delete(ctx: &AppContext, reference: &str) -> Result<()> {
    let ws = ctx.resolve(reference)?;

    let question = format!("Delete workspace '{}'?", ws.name);
    if !ctx
        .presenter()
        .confirm(&question, "Its apps and shortcut will be forgotten.")
    {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = ctx.delete_workspace(&ws.id.to_string())?;
    println!("Deleted workspace '{}'.", removed.name);

    Ok(())
}
