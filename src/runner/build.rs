//! Building the tool under test.

use crate::error::{ProbeError, Result};
use crate::runner::outcome::UNKNOWN_ERROR;
use crate::shell::{execute, CommandOptions};

/// Run `<cargo> build` once, without a timeout.
///
/// A non-zero exit becomes [`ProbeError::BuildFailed`] carrying the captured
/// stderr. Callers treat any error here as fatal for the run.
pub fn build(cargo: &str) -> Result<()> {
    let args = vec!["build".to_string()];
    let result = execute(cargo, &args, &CommandOptions::default())?;

    if result.success {
        tracing::debug!("Build finished in {:?}", result.duration);
        return Ok(());
    }

    let stderr = result.stderr.trim();
    Err(ProbeError::BuildFailed {
        stderr: if stderr.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            stderr.to_string()
        },
    })
}
