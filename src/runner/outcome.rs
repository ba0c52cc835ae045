//! Per-registry test outcomes and their classification.

use std::time::Duration;

use crate::shell::CommandResult;
use crate::ui::StatusKind;

/// Placeholder used when a failing command wrote nothing to stderr.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Why a registry was not tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingToken,
    MissingPackage,
}

/// Why an `add` invocation counts as failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailReason {
    /// The tool exited non-zero.
    ExitCode { code: Option<i32>, stderr: String },
    /// The tool exited zero but never reported installing the package.
    NotInstalled { package: String, stderr: String },
}

/// Outcome of probing one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The package was installed; `installed` is the matching stderr line.
    Pass { installed: String, stderr: String },
    Fail(FailReason),
    Timeout { after: Duration },
    /// The tool could not be run at all.
    Error { message: String },
    Skipped(SkipReason),
}

impl Outcome {
    /// Classify a finished `add` invocation for `package`.
    ///
    /// A zero exit only counts as a pass when some stderr line starts with
    /// ` + <package>==`; the tool can exit cleanly after resolving the
    /// package from another index.
    pub fn classify(package: &str, result: &CommandResult, timeout: Duration) -> Self {
        if result.timed_out {
            return Self::Timeout { after: timeout };
        }

        if !result.success {
            return Self::Fail(FailReason::ExitCode {
                code: result.exit_code,
                stderr: result.stderr.trim().to_string(),
            });
        }

        match installed_line(package, &result.stderr) {
            Some(line) => Self::Pass {
                installed: line.to_string(),
                stderr: result.stderr.trim().to_string(),
            },
            None => Self::Fail(FailReason::NotInstalled {
                package: package.to_string(),
                stderr: result.stderr.trim().to_string(),
            }),
        }
    }

    /// Whether the registry passed. Skips are not successes.
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Tag used when printing the outcome.
    pub fn status_kind(&self) -> StatusKind {
        match self {
            Self::Pass { .. } => StatusKind::Pass,
            Self::Fail(_) => StatusKind::Fail,
            Self::Timeout { .. } => StatusKind::Timeout,
            Self::Error { .. } => StatusKind::Error,
            Self::Skipped(_) => StatusKind::Skipped,
        }
    }
}

/// Find the stderr line announcing `package` as installed.
pub fn installed_line<'a>(package: &str, stderr: &'a str) -> Option<&'a str> {
    let prefix = format!(" + {}==", package);
    stderr.lines().find(|line| line.starts_with(&prefix))
}
