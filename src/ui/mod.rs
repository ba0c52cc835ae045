//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled lines to stdout
//! - [`MockUI`] capturing lines for tests
//! - [`StatusKind`] and [`ProbeTheme`] for consistent status lines

pub mod mock;
pub mod status;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, StatusLine};
pub use status::StatusKind;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ProbeTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a per-registry status line.
    fn status(&mut self, registry: &str, kind: StatusKind, detail: Option<&str>);

    /// Display an indented, labelled block such as captured stderr.
    fn detail(&mut self, label: &str, text: &str);

    /// Display the run summary.
    fn summary(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
