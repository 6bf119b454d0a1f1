//! Desktop queries for niceutil.
//!
//! - Host backends for running apps, on-screen windows and spaces
//! - The current-space capture heuristic
//! - The active space number and indicator

pub mod capture;
pub mod error;
pub mod provider;
pub mod spaces;
pub mod types;

pub use capture::{all_running, capture_current_space, Capture};
pub use error::DesktopError;
pub use spaces::{current_space_number, SpaceIndicator};

#[cfg(test)]
pub use provider::MockDesktopProvider;
