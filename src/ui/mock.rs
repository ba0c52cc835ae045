//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use registry_probe::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Building...");
//! ui.status("aws", StatusKind::Pass, None);
//!
//! assert!(ui.messages().contains(&"Building...".to_string()));
//! assert_eq!(ui.status_kinds(), vec![StatusKind::Pass]);
//! ```

use super::{StatusKind, UserInterface};

/// A captured status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub registry: String,
    pub kind: StatusKind,
    pub detail: Option<String>,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    statuses: Vec<StatusLine>,
    details: Vec<(String, String)>,
    summaries: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured status lines.
    pub fn statuses(&self) -> &[StatusLine] {
        &self.statuses
    }

    /// Kinds of all captured status lines, in order.
    pub fn status_kinds(&self) -> Vec<StatusKind> {
        self.statuses.iter().map(|s| s.kind).collect()
    }

    /// Get all captured `(label, text)` detail lines.
    pub fn details(&self) -> &[(String, String)] {
        &self.details
    }

    /// Get all captured summary lines.
    pub fn summaries(&self) -> &[String] {
        &self.summaries
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check whether any message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn status(&mut self, registry: &str, kind: StatusKind, detail: Option<&str>) {
        self.statuses.push(StatusLine {
            registry: registry.to_string(),
            kind,
            detail: detail.map(str::to_string),
        });
    }

    fn detail(&mut self, label: &str, text: &str) {
        self.details.push((label.to_string(), text.to_string()));
    }

    fn summary(&mut self, msg: &str) {
        self.summaries.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
