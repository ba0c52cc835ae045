//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ProbeTheme, StatusKind, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: ProbeTheme,
}

impl TerminalUI {
    /// Create a new terminal UI, styled unless colors are disabled.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            ProbeTheme::new()
        } else {
            ProbeTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn status(&mut self, registry: &str, kind: StatusKind, detail: Option<&str>) {
        writeln!(self.term, "{}", kind.format(&self.theme, registry, detail)).ok();
    }

    fn detail(&mut self, label: &str, text: &str) {
        writeln!(self.term, "  {} {}", self.theme.dim.apply_to(label), text).ok();
    }

    fn summary(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_summary(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }
}
