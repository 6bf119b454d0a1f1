//! Application context for niceutil.
//!
//! Handlers receive an [`AppContext`] instead of reaching for process-wide
//! state; user interaction goes through a [`Presenter`].

pub mod context;
pub mod presenter;

pub use context::{AppContext, CaptureScope, SaveOutcome, SaveRequest};
pub use presenter::{Presenter, TerminalPresenter};
