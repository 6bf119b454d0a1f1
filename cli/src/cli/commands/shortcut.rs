//! Shortcut command handlers for the niceutil CLI.
//!
//! Bindings are stored here; a menu-bar front end listens for them.

use crate::app::AppContext;
use crate::error::Result;
use crate::shortcuts::Shortcut;

/// Handles the `niceutil shortcut set <workspace> <keys>` command.
///
/// # Errors
///
/// Returns an error if the keys do not parse, the workspace cannot be
/// resolved, or the shortcut is held by another workspace.
pub fn handle_shortcut_set(ctx: &AppContext, reference: &str, keys: &str) -> Result<()> {
    let shortcut: Shortcut = keys.parse()?;
    let ws = ctx.record_shortcut(reference, shortcut.clone())?;
    println!("Shortcut {shortcut} now loads workspace '{}'.", ws.name);
    Ok(())
}

/// Handles the `niceutil shortcut remove <workspace>` command.
///
/// # Errors
///
/// Returns an error if the workspace cannot be resolved or the binding
/// store cannot be written.
pub fn handle_shortcut_remove(ctx: &AppContext, reference: &str) -> Result<()> {
    match ctx.remove_shortcut(reference)? {
        (ws, Some(previous)) => println!("Removed shortcut {previous} from '{}'.", ws.name),
        (ws, None) => println!("Workspace '{}' has no shortcut.", ws.name),
    }
    Ok(())
}

/// Handles the `niceutil shortcut list` command.
pub fn handle_shortcut_list(ctx: &AppContext) -> Result<()> {
    let bound: Vec<_> = ctx
        .menu()
        .into_iter()
        .filter_map(|entry| entry.shortcut.map(|s| (s, entry.workspace)))
        .collect();

    if bound.is_empty() {
        println!("No shortcuts set.");
        println!("\nAdd one with: niceutil shortcut set <workspace> ctrl+opt+1");
        return Ok(());
    }

    for (shortcut, ws) in bound {
        println!("  {shortcut:<10} {}", ws.name);
    }
    Ok(())
}
