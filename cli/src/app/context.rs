//! The application context and the flows behind each menu action.
//!
//! [`AppContext`] owns everything a handler needs. Nothing is cached across
//! calls: each operation reloads the stores, so the documents on disk stay
//! the single source of truth.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::presenter::{Presenter, TerminalPresenter};
use crate::config::NiceConfig;
use crate::desktop::provider::{self, DesktopProvider};
use crate::desktop::{all_running, capture_current_space, current_space_number, Capture};
use crate::desktop::{DesktopError, SpaceIndicator};
use crate::error::{NiceError, Result};
use crate::launcher::{self, AppOpener, LaunchReport, SystemOpener};
use crate::shortcuts::{
    FileShortcutStore, Shortcut, ShortcutError, ShortcutName, ShortcutStore,
};
use crate::workspace::{
    find, FileWorkspaceStore, Workspace, WorkspaceApp, WorkspaceError, WorkspaceStore,
};

const NO_WINDOWS_TITLE: &str = "No windows detected on this space.";
const NO_WINDOWS_QUESTION: &str =
    "Would you like to save all currently running apps as this workspace instead?";

/// Which apps a save records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureScope {
    /// Apps with a visible window on the active space.
    CurrentSpace,
    /// Every capturable running app.
    AllRunning,
}

/// A request to save the current apps under a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub name: String,
    pub scope: CaptureScope,
}

/// How a save request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The workspace was written to the store.
    Saved(Workspace),
    /// No windows were found and the user declined saving all running apps.
    Declined,
    /// No capturable apps are running at all.
    NothingToSave,
}

/// An action offered for a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Load,
    AddShortcut,
    EditShortcut,
    RemoveShortcut,
    Delete,
}

impl MenuAction {
    /// Menu item title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Load => "Load Workspace",
            Self::AddShortcut => "Add Shortcut",
            Self::EditShortcut => "Edit Shortcut",
            Self::RemoveShortcut => "Remove Shortcut",
            Self::Delete => "Delete",
        }
    }
}

/// One workspace as presented in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub workspace: Workspace,
    pub shortcut: Option<Shortcut>,
    pub actions: Vec<MenuAction>,
}

/// Owned application state handed to every handler.
pub struct AppContext {
    config: NiceConfig,
    store: Box<dyn WorkspaceStore>,
    shortcuts: Box<dyn ShortcutStore>,
    desktop: std::result::Result<Box<dyn DesktopProvider>, DesktopError>,
    opener: Box<dyn AppOpener>,
    presenter: Box<dyn Presenter>,
}

impl AppContext {
    /// Assembles a context from its parts.
    ///
    /// An unavailable desktop backend is kept as its error; only operations
    /// that query the host fail with it.
    #[must_use]
    pub fn new(
        config: NiceConfig,
        store: Box<dyn WorkspaceStore>,
        shortcuts: Box<dyn ShortcutStore>,
        desktop: std::result::Result<Box<dyn DesktopProvider>, DesktopError>,
        opener: Box<dyn AppOpener>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self {
            config,
            store,
            shortcuts,
            desktop,
            opener,
            presenter,
        }
    }

    /// Wires the file stores and host backends named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined.
    pub fn from_config(config: NiceConfig, assume_yes: bool) -> Result<Self> {
        let data_dir = config.data_dir()?;
        let desktop = provider::from_config(&config.desktop);
        Ok(Self::new(
            config,
            Box::new(FileWorkspaceStore::new(&data_dir)),
            Box::new(FileShortcutStore::new(&data_dir)),
            desktop,
            Box::new(SystemOpener),
            Box::new(TerminalPresenter { assume_yes }),
        ))
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &NiceConfig {
        &self.config
    }

    /// Surface for alerts and confirmations.
    #[must_use]
    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }

    fn desktop(&self) -> Result<&dyn DesktopProvider> {
        match &self.desktop {
            Ok(desktop) => Ok(desktop.as_ref()),
            Err(e) => Err(e.clone().into()),
        }
    }

    /// Finds a workspace by id, id prefix or name.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing or more than one workspace matches.
    pub fn resolve(&self, reference: &str) -> Result<Workspace> {
        find(&self.store.load(), reference).cloned()
    }

    /// The shortcut bound to `workspace`, if any.
    #[must_use]
    pub fn shortcut(&self, workspace: &Workspace) -> Option<Shortcut> {
        self.shortcuts.get(workspace.id)
    }

    /// Builds the workspace menu: one entry per workspace with its shortcut
    /// and the actions that apply.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuEntry> {
        let mut bindings = self.shortcuts.all();
        self.store
            .load()
            .into_iter()
            .map(|workspace| {
                let shortcut = bindings.remove(&ShortcutName::from(workspace.id));
                let mut actions = vec![MenuAction::Load];
                if shortcut.is_some() {
                    actions.extend([MenuAction::EditShortcut, MenuAction::RemoveShortcut]);
                } else {
                    actions.push(MenuAction::AddShortcut);
                }
                actions.push(MenuAction::Delete);
                MenuEntry {
                    workspace,
                    shortcut,
                    actions,
                }
            })
            .collect()
    }

    /// Captures the requested apps and saves them as a new workspace.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty name, a failed host query, an unknown
    /// active space, or a failed write.
    pub async fn save_workspace(&self, request: SaveRequest) -> Result<SaveOutcome> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(WorkspaceError::InvalidName(
                request.name.clone(),
                "name cannot be empty".to_string(),
            )
            .into());
        }

        let desktop = self.desktop()?;
        let running = desktop.running_apps().await?;
        let rules = &self.config.capture;

        let paths: Vec<PathBuf> = match request.scope {
            CaptureScope::AllRunning => all_running(&running, rules),
            CaptureScope::CurrentSpace => {
                let windows = desktop.on_screen_windows().await?;
                match capture_current_space(&running, &windows, rules) {
                    Capture::Visible(paths) => paths,
                    Capture::AskFallback(paths) => {
                        if !self.presenter.confirm(NO_WINDOWS_TITLE, NO_WINDOWS_QUESTION) {
                            return Ok(SaveOutcome::Declined);
                        }
                        paths
                    }
                    Capture::Nothing => return Ok(SaveOutcome::NothingToSave),
                }
            }
        };

        if paths.is_empty() {
            return Ok(SaveOutcome::NothingToSave);
        }

        let space = current_space_number(&desktop.display_spaces().await?)
            .ok_or(WorkspaceError::NoActiveSpace)?;
        debug!("Current space number: {space}");

        let apps = paths
            .iter()
            .map(|path| WorkspaceApp::from_bundle_path(path, space))
            .collect();
        let workspace = Workspace::new(name.to_string(), apps);

        self.store.append(workspace.clone())?;
        info!(
            "Saved workspace '{}' with {} apps",
            workspace.name,
            workspace.apps.len()
        );
        Ok(SaveOutcome::Saved(workspace))
    }

    /// Relaunches every app of a workspace.
    ///
    /// # Errors
    ///
    /// Returns an error only if the workspace cannot be resolved; per-app
    /// failures are in the returned report.
    pub async fn load_workspace(&self, reference: &str) -> Result<(Workspace, LaunchReport)> {
        let workspace = self.resolve(reference)?;
        let report = launcher::launch(self.opener.as_ref(), &workspace, &self.config.launch).await;
        Ok((workspace, report))
    }

    /// Deletes a workspace and its shortcut binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace cannot be resolved or a store write fails.
    pub fn delete_workspace(&self, reference: &str) -> Result<Workspace> {
        let target = self.resolve(reference)?;
        let removed = self
            .store
            .remove(target.id)?
            .ok_or_else(|| WorkspaceError::NotFound(reference.to_string()))?;
        self.shortcuts.reset(removed.id)?;
        info!("Deleted workspace '{}'", removed.name);
        Ok(removed)
    }

    /// Binds `shortcut` to a workspace, replacing its previous binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace cannot be resolved, the shortcut is
    /// held by another workspace, or the write fails.
    pub fn record_shortcut(&self, reference: &str, shortcut: Shortcut) -> Result<Workspace> {
        let all = self.store.load();
        let workspace = find(&all, reference)?.clone();

        match self.shortcuts.record(workspace.id, shortcut) {
            Err(NiceError::Shortcut(ShortcutError::InUse {
                shortcut,
                workspace: holder,
            })) => {
                let holder = all
                    .iter()
                    .find(|w| w.id.to_string() == holder)
                    .map_or(holder, |w| w.name.clone());
                Err(ShortcutError::InUse {
                    shortcut,
                    workspace: holder,
                }
                .into())
            }
            other => other.map(|()| workspace),
        }
    }

    /// Removes a workspace's shortcut, returning the one that was bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace cannot be resolved or the write fails.
    pub fn remove_shortcut(&self, reference: &str) -> Result<(Workspace, Option<Shortcut>)> {
        let workspace = self.resolve(reference)?;
        let previous = self.shortcuts.get(workspace.id);
        if previous.is_some() {
            self.shortcuts.reset(workspace.id)?;
        }
        Ok((workspace, previous))
    }

    /// Position of the active space, or `None` when it cannot be located.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot be queried.
    pub async fn space_indicator(&self) -> Result<Option<SpaceIndicator>> {
        let displays = self.desktop()?.display_spaces().await?;
        Ok(SpaceIndicator::from_displays(&displays))
    }
}
