//! Status vocabulary for per-registry result lines.

use super::theme::ProbeTheme;

/// Result tag printed next to a registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Pass,
    Fail,
    Timeout,
    Error,
    Skipped,
}

impl StatusKind {
    /// Upper-case tag, e.g. `PASS`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Timeout => "TIMEOUT",
            Self::Error => "ERROR",
            Self::Skipped => "SKIPPED",
        }
    }

    /// Style used for the `<registry>: <TAG>` prefix.
    pub fn style(self, theme: &ProbeTheme) -> &console::Style {
        match self {
            Self::Pass => &theme.success,
            Self::Fail | Self::Timeout | Self::Error => &theme.error,
            Self::Skipped => &theme.warning,
        }
    }

    /// Text placed between the tag and its detail. A timeout's detail is a
    /// parenthesised limit, e.g. `TIMEOUT (>30s)`.
    pub fn separator(self) -> &'static str {
        match self {
            Self::Timeout => " ",
            _ => " - ",
        }
    }

    /// Format a status line: `<registry>: <TAG>` styled, then the detail.
    pub fn format(self, theme: &ProbeTheme, registry: &str, detail: Option<&str>) -> String {
        let head = self
            .style(theme)
            .apply_to(format!("{}: {}", registry, self.tag()))
            .to_string();
        match detail {
            Some(detail) if !detail.is_empty() => {
                format!("{}{}{}", head, self.separator(), detail)
            }
            _ => head,
        }
    }
}
