//! registry-probe - smoke tests `uv add` against private package registries.
//!
//! Registries are discovered from `UV_TEST_<NAME>_*` environment variables.
//! The tool under test is built once, then `add` is run against each
//! registry from a scratch project that declares it as the default index.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the run command
//! - [`config`] - Registry discovery and run settings
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Build, probe, classification and reporting
//! - [`shell`] - External command execution with timeouts
//! - [`ui`] - Status lines and summary output
//!
//! # Example
//!
//! ```
//! use registry_probe::runner::installed_line;
//!
//! let stderr = "Resolved 2 packages in 10ms\n + acme-private==1.2.3\n";
//! assert_eq!(installed_line("acme-private", stderr), Some(" + acme-private==1.2.3"));
//! assert_eq!(installed_line("other", stderr), None);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{ProbeError, Result};
