//! External command execution.
//!
//! Commands are run directly (no intermediate shell) with their output
//! captured. Stdout and stderr are drained on reader threads while the
//! parent waits, so a child that writes more than a pipe buffer cannot
//! stall the wait.

use crate::error::{ProbeError, Result};
use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed after exceeding its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    pub fn timeout(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        }
    }

    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        if status.success() {
            Self::success(stdout, stderr, duration)
        } else {
            Self::failure(status.code(), stdout, stderr, duration)
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with the inherited environment).
    pub env: BTreeMap<String, String>,

    /// Timeout (None = wait until the command exits).
    pub timeout: Option<Duration>,
}

/// Render a program and its arguments for messages and logs.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute `program` with `args`, capturing stdout and stderr.
///
/// A program that cannot be found yields [`ProbeError::ToolNotFound`]; other
/// spawn or wait failures yield [`ProbeError::CommandFailed`]. Exceeding the
/// timeout is not an error: the child is killed and a result with
/// `timed_out` set is returned.
pub fn execute(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Running: {}", command_line);

    let mut child = cmd.spawn().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ProbeError::ToolNotFound {
            program: program.to_string(),
        },
        _ => ProbeError::CommandFailed {
            command: command_line.clone(),
            message: e.to_string(),
        },
    })?;

    let stdout_handle = drain(child.stdout.take());
    let stderr_handle = drain(child.stderr.take());

    let status = match options.timeout {
        Some(timeout) => match wait_with_timeout(&mut child, timeout, &command_line)? {
            Some(status) => status,
            None => {
                // Grandchildren may still hold the pipes open, so the reader
                // threads are left to finish on their own.
                let duration = start.elapsed();
                tracing::warn!("{} timed out after {:?}", command_line, timeout);
                return Ok(CommandResult::timeout(duration));
            }
        },
        None => child.wait().map_err(|e| ProbeError::CommandFailed {
            command: command_line.clone(),
            message: e.to_string(),
        })?,
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    let duration = start.elapsed();

    tracing::debug!(
        "{} exited with {:?} after {:?}",
        command_line,
        status.code(),
        duration
    );

    Ok(CommandResult::from_status(status, stdout, stderr, duration))
}

/// Wait for `child`, killing it if `timeout` elapses first.
///
/// Returns `None` when the child was killed.
fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
    command_line: &str,
) -> Result<Option<ExitStatus>> {
    let waited = child
        .wait_timeout(timeout)
        .map_err(|e| ProbeError::CommandFailed {
            command: command_line.to_string(),
            message: e.to_string(),
        })?;

    match waited {
        Some(status) => Ok(Some(status)),
        None => {
            let _ = child.kill();
            let _ = child.wait();
            Ok(None)
        }
    }
}

fn drain<R: Read + Send + 'static>(stream: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut bytes = Vec::new();
        if let Some(mut reader) = stream {
            let _ = reader.read_to_end(&mut bytes);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn execute_successful_command() {
        let result = execute("sh", &sh("echo hello"), &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert!(!result.timed_out);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("sh", &sh("exit 3"), &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_captures_stderr() {
        let result = execute("sh", &sh("echo oops >&2"), &CommandOptions::default()).unwrap();

        assert!(result.stderr.contains("oops"));
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("MY_VAR".to_string(), "my_value".to_string());

        let result = execute("sh", &sh("echo $MY_VAR"), &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("my_value"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let result = execute("sh", &sh("touch marker"), &options).unwrap();

        assert!(result.success);
        assert!(temp.path().join("marker").exists());
    }

    #[test]
    fn execute_kills_command_at_timeout() {
        let options = CommandOptions {
            timeout: Some(Duration::from_millis(200)),
            ..Default::default()
        };

        let result = execute("sh", &sh("exec sleep 10"), &options).unwrap();

        assert!(result.timed_out);
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert!(result.duration < Duration::from_secs(5));
    }

    #[test]
    fn execute_within_timeout_completes() {
        let options = CommandOptions {
            timeout: Some(Duration::from_secs(10)),
            ..Default::default()
        };

        let result = execute("sh", &sh("echo done"), &options).unwrap();

        assert!(result.success);
        assert!(!result.timed_out);
    }

    #[test]
    fn execute_handles_large_output() {
        let options = CommandOptions {
            timeout: Some(Duration::from_secs(10)),
            ..Default::default()
        };

        let result = execute(
            "sh",
            &sh("i=0; while [ $i -lt 20000 ]; do echo line-$i >&2; i=$((i+1)); done"),
            &options,
        )
        .unwrap();

        assert!(result.success);
        assert!(result.stderr.contains("line-19999"));
    }

    #[test]
    fn missing_program_is_tool_not_found() {
        let err = execute(
            "definitely-not-a-real-program-xyz",
            &[],
            &CommandOptions::default(),
        )
        .unwrap_err();

        assert!(
            matches!(err, ProbeError::ToolNotFound { ref program } if program == "definitely-not-a-real-program-xyz")
        );
    }

    #[test]
    fn display_command_joins_arguments() {
        let args = vec!["run".to_string(), "--".to_string(), "add".to_string()];
        assert_eq!(display_command("cargo", &args), "cargo run -- add");
        assert_eq!(display_command("cargo", &[]), "cargo");
    }
}
