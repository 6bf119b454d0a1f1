//! Opening applications on the host.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// One request to open an application bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub path: PathBuf,
    /// Bring the app to the foreground.
    pub activates: bool,
    /// Start another instance even if the app is already running.
    pub new_instance: bool,
}

/// Opens applications; resolves once the host reports success or failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppOpener: Send + Sync {
    /// Opens the app described by `request`.
    ///
    /// # Errors
    ///
    /// Returns the host's failure description.
    async fn open(&self, request: &OpenRequest) -> Result<(), String>;
}

/// Opener backed by the host's application launcher.
///
/// On macOS this is `open(1)`, which honors both flags. Elsewhere the
/// recorded path is an executable and is started directly; every start is
/// a new instance and focus is left to the compositor.
pub struct SystemOpener;

#[async_trait]
impl AppOpener for SystemOpener {
    async fn open(&self, request: &OpenRequest) -> Result<(), String> {
        if cfg!(target_os = "macos") {
            open_bundle(request).await
        } else {
            spawn_executable(&request.path)
        }
    }
}

async fn open_bundle(request: &OpenRequest) -> Result<(), String> {
    let mut cmd = Command::new("open");
    if request.new_instance {
        cmd.arg("-n");
    }
    if !request.activates {
        cmd.arg("-g");
    }
    let output = cmd
        .arg(&request.path)
        .output()
        .await
        .map_err(|e| e.to_string())?;

    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}

/// Starts `path` detached from niceutil; only a failed start is an error.
fn spawn_executable(path: &Path) -> Result<(), String> {
    let child = Command::new(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("{}: {e}", path.display()))?;

    debug!("Started {} (pid {:?})", path.display(), child.id());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn missing_executable_is_reported() {
        let err = spawn_executable(&PathBuf::from("/nonexistent/niceutil-missing-app")).unwrap_err();
        assert!(err.starts_with("/nonexistent/niceutil-missing-app: "));
    }
}
