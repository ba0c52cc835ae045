//! Visual theme and styling.

use console::Style;

/// The probe's visual theme.
#[derive(Debug, Clone)]
pub struct ProbeTheme {
    /// Style for passing results (green).
    pub success: Style,
    /// Style for skipped registries (orange).
    pub warning: Style,
    /// Style for failures and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
}

impl Default for ProbeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Format an error message in red bold.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format the summary line, highlighting the counts.
    pub fn format_summary(&self, msg: &str) -> String {
        format!("{}", self.highlight.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
