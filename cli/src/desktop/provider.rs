//! Host backends answering app, window and space queries.
//!
//! - [`DesktopProvider`] - Trait over the three host queries
//! - [`MacDesktop`] - macOS, via a JavaScript for Automation script run by `osascript`
//! - [`HyprlandDesktop`] - Hyprland, via `hyprctl` JSON output

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::config::DesktopConfig;
use crate::desktop::error::DesktopError;
use crate::desktop::types::{
    ActivationPolicy, DisplaySpaces, RunningApp, SpaceRef, WindowBounds, WindowInfo,
};

/// Host queries needed to capture a workspace and show the space indicator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DesktopProvider: Send + Sync {
    /// Every running application.
    async fn running_apps(&self) -> Result<Vec<RunningApp>, DesktopError>;

    /// Windows currently on screen, excluding desktop elements.
    async fn on_screen_windows(&self) -> Result<Vec<WindowInfo>, DesktopError>;

    /// Spaces per display, with the active one marked.
    async fn display_spaces(&self) -> Result<Vec<DisplaySpaces>, DesktopError>;
}

/// Picks the backend named by the configuration.
///
/// # Errors
///
/// Returns [`DesktopError::Unsupported`] when `auto` finds no backend, or
/// [`DesktopError::UnknownBackend`] for an unrecognized name.
pub fn from_config(config: &DesktopConfig) -> Result<Box<dyn DesktopProvider>, DesktopError> {
    match config.backend.as_str() {
        "macos" => Ok(Box::new(MacDesktop)),
        "hyprland" => Ok(Box::new(HyprlandDesktop)),
        "auto" if cfg!(target_os = "macos") => Ok(Box::new(MacDesktop)),
        "auto" if std::env::var_os("HYPRLAND_INSTANCE_SIGNATURE").is_some() => {
            Ok(Box::new(HyprlandDesktop))
        }
        "auto" => Err(DesktopError::Unsupported),
        other => Err(DesktopError::UnknownBackend(other.to_string())),
    }
}

async fn run_json<T: DeserializeOwned>(tool: &str, args: &[&str]) -> Result<T, DesktopError> {
    debug!("Running {tool} {}", args.join(" "));
    let output = Command::new(tool)
        .args(args)
        .output()
        .await
        .map_err(|e| DesktopError::CommandFailed {
            tool: tool.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(DesktopError::CommandFailed {
            tool: tool.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    serde_json::from_slice(&output.stdout).map_err(|e| DesktopError::Decode {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

/// JXA script printing one of the three snapshots as JSON.
///
/// Window and space dictionaries are passed through as the window server
/// reports them; decoding happens on the Rust side.
const MAC_QUERY_SCRIPT: &str = r#"
ObjC.import('AppKit');
ObjC.import('CoreGraphics');
ObjC.bindFunction('_CGSDefaultConnection', ['int', []]);
ObjC.bindFunction('CGSCopyManagedDisplaySpaces', ['id', ['int']]);

function apps() {
  var list = $.NSWorkspace.sharedWorkspace.runningApplications;
  var out = [];
  for (var i = 0; i < list.count; i++) {
    var a = list.objectAtIndex(i);
    out.push({
      pid: a.processIdentifier,
      bundleId: a.bundleIdentifier.isNil() ? null : ObjC.unwrap(a.bundleIdentifier),
      bundlePath: a.bundleURL.isNil() ? null : ObjC.unwrap(a.bundleURL.path),
      activationPolicy: a.activationPolicy,
      finishedLaunching: a.finishedLaunching
    });
  }
  return out;
}

function windows() {
  var opts = $.kCGWindowListOptionOnScreenOnly | $.kCGWindowListExcludeDesktopElements;
  return ObjC.deepUnwrap(ObjC.castRefToObject($.CGWindowListCopyWindowInfo(opts, $.kCGNullWindowID))) || [];
}

function spaces() {
  return ObjC.deepUnwrap($.CGSCopyManagedDisplaySpaces($._CGSDefaultConnection())) || [];
}

function run(argv) {
  var query = { apps: apps, windows: windows, spaces: spaces }[argv[0]];
  return JSON.stringify(query());
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MacApp {
    pid: i64,
    bundle_id: Option<String>,
    bundle_path: Option<PathBuf>,
    activation_policy: i64,
    #[serde(default)]
    finished_launching: bool,
}

impl From<MacApp> for RunningApp {
    fn from(app: MacApp) -> Self {
        Self {
            pid: app.pid,
            bundle_id: app.bundle_id,
            bundle_path: app.bundle_path,
            activation_policy: ActivationPolicy::from_raw(app.activation_policy),
            finished_launching: app.finished_launching,
        }
    }
}

/// macOS backend.
pub struct MacDesktop;

impl MacDesktop {
    async fn query<T: DeserializeOwned>(what: &str) -> Result<T, DesktopError> {
        run_json("osascript", &["-l", "JavaScript", "-e", MAC_QUERY_SCRIPT, what]).await
    }
}

#[async_trait]
impl DesktopProvider for MacDesktop {
    async fn running_apps(&self) -> Result<Vec<RunningApp>, DesktopError> {
        let apps: Vec<MacApp> = Self::query("apps").await?;
        Ok(apps.into_iter().map(RunningApp::from).collect())
    }

    async fn on_screen_windows(&self) -> Result<Vec<WindowInfo>, DesktopError> {
        Self::query("windows").await
    }

    async fn display_spaces(&self) -> Result<Vec<DisplaySpaces>, DesktopError> {
        Self::query("spaces").await
    }
}

#[derive(Debug, Deserialize)]
struct HyprWorkspaceRef {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct HyprClient {
    pid: i64,
    #[serde(default)]
    class: String,
    #[serde(default = "default_true")]
    mapped: bool,
    #[serde(default)]
    hidden: bool,
    #[serde(default)]
    size: (f64, f64),
    workspace: HyprWorkspaceRef,
}

const fn default_true() -> bool {
    true
}

/// Hyprland backend.
///
/// Workspaces stand in for spaces; a client counts as on screen when it is
/// mapped, not hidden, and on the active workspace. Hyprland has no window
/// layers for clients, so every client reports layer 0.
pub struct HyprlandDesktop;

impl HyprlandDesktop {
    async fn clients() -> Result<Vec<HyprClient>, DesktopError> {
        run_json("hyprctl", &["clients", "-j"]).await
    }

    async fn active_workspace() -> Result<HyprWorkspaceRef, DesktopError> {
        run_json("hyprctl", &["activeworkspace", "-j"]).await
    }
}

/// Executable behind a process, the closest thing Linux has to a bundle path.
fn process_executable(pid: i64) -> Option<PathBuf> {
    std::fs::read_link(format!("/proc/{pid}/exe")).ok()
}

fn visible_windows(clients: &[HyprClient], active: i64) -> Vec<WindowInfo> {
    clients
        .iter()
        .filter(|c| c.mapped && !c.hidden && c.workspace.id == active)
        .map(|c| WindowInfo {
            owner_pid: c.pid,
            layer: 0,
            bounds: WindowBounds {
                width: c.size.0,
                height: c.size.1,
            },
        })
        .collect()
}

fn workspace_spaces(mut ids: Vec<i64>, active: i64) -> DisplaySpaces {
    // Negative ids are special workspaces (scratchpads).
    ids.retain(|id| *id > 0);
    ids.sort_unstable();
    ids.dedup();
    DisplaySpaces {
        current: Some(SpaceRef { id: active }),
        spaces: ids.into_iter().map(|id| SpaceRef { id }).collect(),
    }
}

#[async_trait]
impl DesktopProvider for HyprlandDesktop {
    async fn running_apps(&self) -> Result<Vec<RunningApp>, DesktopError> {
        let mut clients = Self::clients().await?;
        clients.sort_by_key(|c| c.pid);
        clients.dedup_by_key(|c| c.pid);

        Ok(clients
            .into_iter()
            .map(|c| RunningApp {
                pid: c.pid,
                bundle_id: (!c.class.is_empty()).then_some(c.class),
                bundle_path: process_executable(c.pid),
                activation_policy: ActivationPolicy::Regular,
                finished_launching: true,
            })
            .collect())
    }

    async fn on_screen_windows(&self) -> Result<Vec<WindowInfo>, DesktopError> {
        let active = Self::active_workspace().await?.id;
        Ok(visible_windows(&Self::clients().await?, active))
    }

    async fn display_spaces(&self) -> Result<Vec<DisplaySpaces>, DesktopError> {
        let active = Self::active_workspace().await?.id;
        let workspaces: Vec<HyprWorkspaceRef> = run_json("hyprctl", &["workspaces", "-j"]).await?;
        let ids = workspaces.into_iter().map(|w| w.id).collect();
        Ok(vec![workspace_spaces(ids, active)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_window_server_dictionaries() {
        let json = r#"[
            {"kCGWindowOwnerPID": 512, "kCGWindowLayer": 0,
             "kCGWindowBounds": {"X": 0, "Y": 25, "Width": 1440, "Height": 875},
             "kCGWindowOwnerName": "Safari"},
            {"kCGWindowOwnerPID": 90, "kCGWindowLayer": 25,
             "kCGWindowBounds": {"X": 1300, "Y": 0, "Width": 38, "Height": 24}}
        ]"#;
        let windows: Vec<WindowInfo> = serde_json::from_str(json).unwrap();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].owner_pid, 512);
        assert!((windows[0].bounds.width - 1440.0).abs() < f64::EPSILON);
        assert_eq!(windows[1].layer, 25);
    }

    #[test]
    fn decodes_mac_running_apps() {
        let json = r#"[
            {"pid": 512, "bundleId": "com.apple.Safari",
             "bundlePath": "/Applications/Safari.app", "activationPolicy": 0,
             "finishedLaunching": true},
            {"pid": 77, "bundleId": null, "bundlePath": null, "activationPolicy": 2,
             "finishedLaunching": true}
        ]"#;
        let apps: Vec<MacApp> = serde_json::from_str(json).unwrap();
        let apps: Vec<RunningApp> = apps.into_iter().map(RunningApp::from).collect();

        assert_eq!(apps[0].activation_policy, ActivationPolicy::Regular);
        assert_eq!(
            apps[0].bundle_path.as_deref(),
            Some(std::path::Path::new("/Applications/Safari.app"))
        );
        assert_eq!(apps[1].activation_policy, ActivationPolicy::Prohibited);
        assert!(apps[1].bundle_id.is_none());
    }

    #[test]
    fn hyprland_windows_only_from_active_workspace() {
        let json = r#"[
            {"pid": 100, "class": "firefox", "mapped": true, "hidden": false,
             "size": [1920, 1050], "workspace": {"id": 2, "name": "2"}},
            {"pid": 200, "class": "kitty", "mapped": true, "hidden": false,
             "size": [900, 600], "workspace": {"id": 1, "name": "1"}},
            {"pid": 300, "class": "pavucontrol", "mapped": true, "hidden": true,
             "size": [600, 400], "workspace": {"id": 2, "name": "2"}}
        ]"#;
        let clients: Vec<HyprClient> = serde_json::from_str(json).unwrap();
        let windows = visible_windows(&clients, 2);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].owner_pid, 100);
        assert_eq!(windows[0].layer, 0);
    }

    #[test]
    fn hyprland_workspaces_become_ordered_spaces() {
        let display = workspace_spaces(vec![3, -98, 1, 5, 3], 5);
        let ids: Vec<i64> = display.spaces.iter().map(|s| s.id).collect();

        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(display.current, Some(SpaceRef { id: 5 }));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let config = DesktopConfig {
            backend: "windows".to_string(),
        };
        assert!(matches!(
            from_config(&config),
            Err(DesktopError::UnknownBackend(_))
        ));
    }
}
