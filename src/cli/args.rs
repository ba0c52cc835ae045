//! CLI argument definitions.

use clap::{ArgAction, Parser};

use crate::config::DEFAULT_CARGO;

/// Test `uv add` against multiple package registries.
///
/// Registries are configured through `UV_TEST_<NAME>_URL`,
/// `UV_TEST_<NAME>_TOKEN`, `UV_TEST_<NAME>_PKG` and optionally
/// `UV_TEST_<NAME>_USERNAME`.
#[derive(Debug, Parser)]
#[command(name = "registry-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Timeout in seconds for each test (default: 30 or UV_TEST_TIMEOUT)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Program used to build and run the tool under test
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_CARGO)]
    pub cargo: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
