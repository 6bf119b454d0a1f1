//! Aggregated outcome of launching a workspace.

/// One app that did not open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchFailure {
    /// The stored `appPath`, verbatim.
    pub app_path: String,
    /// Name shown to the user: the bundle's file name, or the raw path when
    /// it could not be parsed.
    pub label: String,
    pub reason: String,
}

/// Every failure from one launch, in workspace order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchReport {
    pub attempted: usize,
    pub failures: Vec<LaunchFailure>,
}

impl LaunchReport {
    /// True when every app opened.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of apps that opened.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }

    /// One combined message for all failures.
    #[must_use]
    pub fn message(&self) -> String {
        let labels: Vec<&str> = self.failures.iter().map(|f| f.label.as_str()).collect();
        format!("Failed to launch: {}", labels.join(", "))
    }
}
