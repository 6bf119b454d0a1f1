//! Relaunching the apps of a saved workspace.
//!
//! Every app is attempted in order and each attempt is awaited until the
//! host reports its outcome. A failure never stops the remaining attempts;
//! failures are collected into one [`LaunchReport`].

pub mod opener;
pub mod report;

use std::path::PathBuf;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::LaunchConfig;
use crate::workspace::{Workspace, WorkspaceApp};

pub use opener::{AppOpener, OpenRequest, SystemOpener};
pub use report::{LaunchFailure, LaunchReport};

#[cfg(test)]
pub use opener::MockAppOpener;

/// Resolves a stored `appPath` to a local bundle path.
fn bundle_path(app: &WorkspaceApp) -> Result<PathBuf, String> {
    let url = Url::parse(&app.app_path).map_err(|e| format!("invalid location: {e}"))?;
    url.to_file_path()
        .map_err(|()| format!("not a local application: {url}"))
}

/// File name of the bundle, used to name the app to the user.
fn label_for(path: &std::path::Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Opens every app of `workspace` and reports the ones that failed.
pub async fn launch(
    opener: &dyn AppOpener,
    workspace: &Workspace,
    config: &LaunchConfig,
) -> LaunchReport {
    info!("Launching workspace '{}'", workspace.name);
    let mut report = LaunchReport {
        attempted: workspace.apps.len(),
        failures: Vec::new(),
    };

    for app in &workspace.apps {
        debug!(
            "Attempting to launch {} (saved from space {})",
            app.app_path, app.space_number
        );

        let path = match bundle_path(app) {
            Ok(path) => path,
            Err(reason) => {
                warn!("Skipping {}: {reason}", app.app_path);
                report.failures.push(LaunchFailure {
                    app_path: app.app_path.clone(),
                    label: app.app_path.clone(),
                    reason,
                });
                continue;
            }
        };

        let label = label_for(&path).unwrap_or_else(|| app.app_path.clone());
        let request = OpenRequest {
            path,
            activates: config.activates,
            new_instance: config.new_instance,
        };

        match opener.open(&request).await {
            Ok(()) => debug!("Opened {label}"),
            Err(reason) => {
                warn!("Failed to open {label}: {reason}");
                report.failures.push(LaunchFailure {
                    app_path: app.app_path.clone(),
                    label,
                    reason,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::function;
    use mockall::Sequence;

    fn workspace(paths: &[&str]) -> Workspace {
        Workspace::new(
            "test".to_string(),
            paths
                .iter()
                .map(|p| WorkspaceApp {
                    app_path: (*p).to_string(),
                    space_number: 1,
                })
                .collect(),
        )
    }

    fn opens(name: &'static str) -> impl Fn(&OpenRequest) -> bool {
        move |req: &OpenRequest| req.path.ends_with(name)
    }

    #[tokio::test]
    async fn failure_in_the_middle_does_not_stop_later_apps() {
        let mut opener = MockAppOpener::new();
        let mut seq = Sequence::new();
        opener
            .expect_open()
            .with(function(opens("Safari.app")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        opener
            .expect_open()
            .with(function(opens("Notes.app")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err("application not found".to_string()));
        opener
            .expect_open()
            .with(function(opens("Mail.app")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let ws = workspace(&[
            "file:///Applications/Safari.app/",
            "file:///Applications/Notes.app/",
            "file:///Applications/Mail.app/",
        ]);
        let report = launch(&opener, &ws, &LaunchConfig::default()).await;

        assert_eq!(report.attempted, 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].label, "Notes.app");
        assert_eq!(
            report.failures[0].app_path,
            "file:///Applications/Notes.app/"
        );
        assert_eq!(report.message(), "Failed to launch: Notes.app");
    }

    #[tokio::test]
    async fn requests_force_a_new_active_instance_by_default() {
        let mut opener = MockAppOpener::new();
        opener
            .expect_open()
            .withf(|req| req.new_instance && req.activates)
            .times(1)
            .returning(|_| Ok(()));

        let ws = workspace(&["file:///Applications/Safari.app/"]);
        let report = launch(&opener, &ws, &LaunchConfig::default()).await;

        assert!(report.is_success());
    }

    #[tokio::test]
    async fn malformed_paths_are_reported_like_launch_failures() {
        let mut opener = MockAppOpener::new();
        opener
            .expect_open()
            .times(1)
            .returning(|_| Ok(()));

        let ws = workspace(&[
            "not a url",
            "https://example.com/App.app",
            "file:///Applications/Safari.app/",
        ]);
        let report = launch(&opener, &ws, &LaunchConfig::default()).await;

        let labels: Vec<&str> = report.failures.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["not a url", "https://example.com/App.app"]);
        assert_eq!(
            report.message(),
            "Failed to launch: not a url, https://example.com/App.app"
        );
    }

    #[tokio::test]
    async fn captured_executable_is_opened_at_its_own_path() {
        let saved = WorkspaceApp::from_bundle_path(&PathBuf::from("/usr/bin/kitty"), 1);
        let ws = Workspace::new("term".to_string(), vec![saved]);

        let mut opener = MockAppOpener::new();
        opener
            .expect_open()
            .withf(|req| req.path == PathBuf::from("/usr/bin/kitty"))
            .times(1)
            .returning(|_| Err("/usr/bin/kitty: No such file or directory".to_string()));

        let report = launch(&opener, &ws, &LaunchConfig::default()).await;

        assert!(!report.is_success());
        assert_eq!(report.failures[0].label, "kitty");
        assert_eq!(report.message(), "Failed to launch: kitty");
    }

    #[tokio::test]
    async fn empty_workspace_is_a_trivial_success() {
        let opener = MockAppOpener::new();
        let report = launch(&opener, &workspace(&[]), &LaunchConfig::default()).await;

        assert!(report.is_success());
        assert_eq!(report.attempted, 0);
    }
}
