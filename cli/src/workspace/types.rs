//! Workspace data types for niceutil.
//!
//! The serialized shape is fixed: a workspace document written by one
//! version must decode in another, so field names are pinned with serde
//! renames rather than following Rust naming.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Stable identity of a workspace.
///
/// Serialized as an uppercase hyphenated UUID; parsing accepts either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns true if the id's textual form starts with `prefix` (case-insensitive).
    #[must_use]
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.to_string()
            .to_ascii_lowercase()
            .starts_with(&prefix.to_ascii_lowercase())
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl FromStr for WorkspaceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl TryFrom<String> for WorkspaceId {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkspaceId> for String {
    fn from(id: WorkspaceId) -> Self {
        id.to_string()
    }
}

/// One application recorded in a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceApp {
    /// Location of the application bundle in URL form (`file:///Applications/Safari.app/`).
    pub app_path: String,

    /// 1-based desktop space the app was captured from.
    pub space_number: usize,
}

impl WorkspaceApp {
    /// Records an application location captured on `space_number`.
    ///
    /// `.app` bundles are directories and get a trailing slash; anything
    /// else (a plain executable) is recorded as a file URL. Paths that
    /// cannot be expressed as a URL (relative paths) are kept verbatim;
    /// they fail later at launch time like any other bad location.
    #[must_use]
    pub fn from_bundle_path(path: &Path, space_number: usize) -> Self {
        let url = if is_app_bundle(path) {
            Url::from_directory_path(path)
        } else {
            Url::from_file_path(path)
        };
        let app_path = url.map_or_else(|()| path.display().to_string(), String::from);
        Self {
            app_path,
            space_number,
        }
    }
}

fn is_app_bundle(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("app"))
}

/// A named, ordered set of applications to relaunch together.
///
/// Identity is the `id` alone: two values with the same id are the same
/// workspace even if their names or app lists differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Assigned at creation, never changes.
    pub id: WorkspaceId,

    /// Display name chosen by the user. Not unique.
    pub name: String,

    /// Apps in the order they were saved.
    pub apps: Vec<WorkspaceApp>,
}

impl Workspace {
    /// Creates a workspace with a fresh id.
    #[must_use]
    pub fn new(name: String, apps: Vec<WorkspaceApp>) -> Self {
        Self {
            id: WorkspaceId::new(),
            name,
            apps,
        }
    }
}

impl PartialEq for Workspace {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Workspace {}

impl Hash for Workspace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn app(path: &str) -> WorkspaceApp {
        WorkspaceApp {
            app_path: path.to_string(),
            space_number: 1,
        }
    }

    #[test]
    fn same_id_is_equal_regardless_of_contents() {
        let original = Workspace::new("Writing".to_string(), vec![app("file:///A.app/")]);
        let mut edited = original.clone();
        edited.name = "Coding".to_string();
        edited.apps.clear();

        assert_eq!(original, edited);
    }

    #[test]
    fn different_ids_are_unequal_with_same_contents() {
        let a = Workspace::new("Writing".to_string(), vec![app("file:///A.app/")]);
        let b = Workspace::new("Writing".to_string(), vec![app("file:///A.app/")]);

        assert_ne!(a, b);
    }

    #[test]
    fn serializes_with_fixed_field_names() {
        let id: WorkspaceId = "e621e1f8-c36c-495a-93fc-0c247a3e6e5f".parse().unwrap();
        let ws = Workspace {
            id,
            name: "Mail".to_string(),
            apps: vec![WorkspaceApp {
                app_path: "file:///Applications/Mail.app/".to_string(),
                space_number: 2,
            }],
        };

        let json = serde_json::to_value(&ws).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "E621E1F8-C36C-495A-93FC-0C247A3E6E5F",
                "name": "Mail",
                "apps": [{"appPath": "file:///Applications/Mail.app/", "spaceNumber": 2}]
            })
        );
    }

    #[test]
    fn decodes_lowercase_ids() {
        let json = r#"{"id":"e621e1f8-c36c-495a-93fc-0c247a3e6e5f","name":"x","apps":[]}"#;
        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.id.to_string(), "E621E1F8-C36C-495A-93FC-0C247A3E6E5F");
    }

    #[test]
    fn rejects_invalid_id() {
        let json = r#"{"id":"not-a-uuid","name":"x","apps":[]}"#;
        assert!(serde_json::from_str::<Workspace>(json).is_err());
    }

    #[test]
    fn bundle_path_becomes_directory_url() {
        let app = WorkspaceApp::from_bundle_path(&PathBuf::from("/Applications/Safari.app"), 3);
        assert_eq!(app.app_path, "file:///Applications/Safari.app/");
        assert_eq!(app.space_number, 3);
    }

    #[test]
    fn executable_path_becomes_file_url() {
        let app = WorkspaceApp::from_bundle_path(&PathBuf::from("/usr/bin/kitty"), 2);
        assert_eq!(app.app_path, "file:///usr/bin/kitty");
    }

    #[test]
    fn relative_path_is_kept_verbatim() {
        let app = WorkspaceApp::from_bundle_path(&PathBuf::from("bin/kitty"), 1);
        assert_eq!(app.app_path, "bin/kitty");
    }

    #[test]
    fn id_prefix_matching_ignores_case() {
        let id: WorkspaceId = "E621E1F8-C36C-495A-93FC-0C247A3E6E5F".parse().unwrap();
        assert!(id.matches_prefix("e621"));
        assert!(id.matches_prefix("E621E1F8-C3"));
        assert!(!id.matches_prefix("f621"));
    }
}
