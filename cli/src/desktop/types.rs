//! Snapshots of the host's running applications, windows and spaces.
//!
//! Field names follow what the window server reports so backends can decode
//! straight into these types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How an application participates in the Dock and menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationPolicy {
    /// Ordinary app with a Dock icon.
    Regular,
    /// Agent app that may show windows but has no Dock icon.
    Accessory,
    /// Background-only process.
    Prohibited,
}

impl ActivationPolicy {
    /// Maps the numeric `NSApplicationActivationPolicy` value.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::Regular,
            1 => Self::Accessory,
            _ => Self::Prohibited,
        }
    }
}

/// A running application as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningApp {
    pub pid: i64,
    pub bundle_id: Option<String>,
    pub bundle_path: Option<PathBuf>,
    pub activation_policy: ActivationPolicy,
    pub finished_launching: bool,
}

/// Size of a window's frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct WindowBounds {
    #[serde(rename = "Width", default)]
    pub width: f64,
    #[serde(rename = "Height", default)]
    pub height: f64,
}

/// An on-screen window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowInfo {
    #[serde(rename = "kCGWindowOwnerPID")]
    pub owner_pid: i64,
    #[serde(rename = "kCGWindowLayer", default)]
    pub layer: i64,
    #[serde(rename = "kCGWindowBounds", default)]
    pub bounds: WindowBounds,
}

/// Reference to one managed space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SpaceRef {
    #[serde(rename = "ManagedSpaceID")]
    pub id: i64,
}

/// The spaces of one display, in Mission Control order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplaySpaces {
    #[serde(rename = "Current Space")]
    pub current: Option<SpaceRef>,
    #[serde(rename = "Spaces", default)]
    pub spaces: Vec<SpaceRef>,
}
