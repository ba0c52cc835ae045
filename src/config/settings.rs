//! Run settings resolved from the command line and environment.

use std::time::Duration;

use crate::error::{ProbeError, Result};

/// Timeout applied to each `add` invocation when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the default timeout in seconds.
pub const TIMEOUT_VAR: &str = "UV_TEST_TIMEOUT";

/// Program used for both the build and the `add` invocation by default.
pub const DEFAULT_CARGO: &str = "cargo";

/// Verbosity forwarded to the tool under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbosity(pub u8);

impl Verbosity {
    /// Flag passed to the tool (`-v` at level one, `-vv` from two up).
    pub fn tool_flag(&self) -> Option<&'static str> {
        match self.0 {
            0 => None,
            1 => Some("-v"),
            _ => Some("-vv"),
        }
    }

    /// Whether captured output is echoed for passing tests.
    pub fn shows_output(&self) -> bool {
        self.0 > 0
    }
}

/// Everything a run needs besides the registries themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Per-invocation wall-clock timeout.
    pub timeout: Duration,
    /// Verbosity level.
    pub verbosity: Verbosity,
    /// Program used for `build` and `run -- add`.
    pub cargo: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbosity: Verbosity::default(),
            cargo: DEFAULT_CARGO.to_string(),
        }
    }
}

/// Resolve the timeout.
///
/// Precedence: command line > `UV_TEST_TIMEOUT` > [`DEFAULT_TIMEOUT_SECS`].
pub fn resolve_timeout(cli: Option<u64>, env: Option<&str>) -> Result<Duration> {
    if let Some(secs) = cli {
        return Ok(Duration::from_secs(secs));
    }

    match env {
        Some(raw) => {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ProbeError::InvalidTimeout {
                    value: raw.to_string(),
                })?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

/// Resolve the timeout against the current process environment.
pub fn resolve_timeout_from_env(cli: Option<u64>) -> Result<Duration> {
    let env = std::env::var(TIMEOUT_VAR).ok();
    resolve_timeout(cli, env.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_timeout_wins_over_env_and_default() {
        let timeout = resolve_timeout(Some(5), Some("10")).unwrap();
        assert_eq!(timeout, Duration::from_secs(5));
    }

    #[test]
    fn env_timeout_wins_over_default() {
        let timeout = resolve_timeout(None, Some("10")).unwrap();
        assert_eq!(timeout, Duration::from_secs(10));
    }

    #[test]
    fn default_timeout_when_unset() {
        let timeout = resolve_timeout(None, None).unwrap();
        assert_eq!(timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn cli_timeout_ignores_invalid_env() {
        let timeout = resolve_timeout(Some(7), Some("abc")).unwrap();
        assert_eq!(timeout, Duration::from_secs(7));
    }

    #[test]
    fn invalid_env_timeout_is_an_error() {
        let err = resolve_timeout(None, Some("abc")).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidTimeout { value } if value == "abc"));
    }

    #[test]
    fn verbosity_tool_flag() {
        assert_eq!(Verbosity(0).tool_flag(), None);
        assert_eq!(Verbosity(1).tool_flag(), Some("-v"));
        assert_eq!(Verbosity(2).tool_flag(), Some("-vv"));
        assert_eq!(Verbosity(5).tool_flag(), Some("-vv"));
    }

    #[test]
    fn verbosity_shows_output() {
        assert!(!Verbosity(0).shows_output());
        assert!(Verbosity(1).shows_output());
    }

    #[test]
    fn settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.verbosity, Verbosity(0));
        assert_eq!(settings.cargo, "cargo");
    }
}
