//! Deciding which running apps belong to the current space.
//!
//! The host offers no "which space owns this window" query, so membership is
//! approximated: an app counts when it owns an on-screen window on the main
//! layer that is larger than a minimum size. Minimized or fully occluded
//! windows are not seen by this test, and apps whose only windows are small
//! panels are dropped.

use std::path::PathBuf;

use tracing::debug;

use crate::config::CaptureConfig;
use crate::desktop::types::{ActivationPolicy, RunningApp, WindowInfo};

/// Result of inspecting the current space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// Apps with a qualifying window on screen, in running-app order.
    Visible(Vec<PathBuf>),
    /// Nothing qualified; these are all capturable running apps, offered as a fallback.
    AskFallback(Vec<PathBuf>),
    /// Nothing qualified and nothing is running to fall back to.
    Nothing,
}

/// Running apps a workspace may record: regular, done launching, with a
/// bundle, and not excluded by bundle id.
#[must_use]
pub fn capturable_apps<'a>(apps: &'a [RunningApp], rules: &CaptureConfig) -> Vec<&'a RunningApp> {
    apps.iter()
        .filter(|app| {
            let Some(bundle_id) = app.bundle_id.as_deref() else {
                return false;
            };
            app.activation_policy == ActivationPolicy::Regular
                && app.finished_launching
                && app.bundle_path.is_some()
                && !rules
                    .excluded_bundle_ids
                    .iter()
                    .any(|excluded| bundle_id.contains(excluded.as_str()))
        })
        .collect()
}

fn has_qualifying_window(pid: i64, windows: &[WindowInfo], rules: &CaptureConfig) -> bool {
    windows.iter().any(|w| {
        w.owner_pid == pid
            && w.layer == rules.main_window_layer
            && w.bounds.width > rules.min_window_width
            && w.bounds.height > rules.min_window_height
    })
}

/// Bundle paths of the apps visible on the current space.
#[must_use]
pub fn apps_visible_on_current_space(
    apps: &[RunningApp],
    windows: &[WindowInfo],
    rules: &CaptureConfig,
) -> Vec<PathBuf> {
    capturable_apps(apps, rules)
        .into_iter()
        .filter(|app| has_qualifying_window(app.pid, windows, rules))
        .filter_map(|app| {
            let path = app.bundle_path.clone()?;
            debug!("Found app with visible windows: {}", path.display());
            Some(path)
        })
        .collect()
}

/// Classifies the current space for a save.
#[must_use]
pub fn capture_current_space(
    apps: &[RunningApp],
    windows: &[WindowInfo],
    rules: &CaptureConfig,
) -> Capture {
    let visible = apps_visible_on_current_space(apps, windows, rules);
    debug!("Found {} apps with visible windows on current space", visible.len());
    if !visible.is_empty() {
        return Capture::Visible(visible);
    }

    let fallback = all_running(apps, rules);
    if fallback.is_empty() {
        Capture::Nothing
    } else {
        Capture::AskFallback(fallback)
    }
}

/// Bundle paths of every capturable running app.
#[must_use]
pub fn all_running(apps: &[RunningApp], rules: &CaptureConfig) -> Vec<PathBuf> {
    capturable_apps(apps, rules)
        .into_iter()
        .filter_map(|app| app.bundle_path.clone())
        .collect()
}
