//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - Command trait and result type
//! - [`run`] - The build-then-probe run

pub mod args;
pub mod command;
pub mod run;

pub use args::Cli;
pub use command::{Command, CommandResult};
pub use run::RunCommand;
