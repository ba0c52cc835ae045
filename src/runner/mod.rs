//! Build-then-probe orchestration.
//!
//! - [`build`] - One-off build of the tool under test
//! - [`project`] - Scratch `pyproject.toml` per registry
//! - [`probe`] - Running `add` against one registry
//! - [`outcome`] - Classifying a finished invocation
//! - [`report`] - Counting outcomes and printing the summary

pub mod build;
pub mod outcome;
pub mod probe;
pub mod project;
pub mod report;

pub use build::build;
pub use outcome::{installed_line, FailReason, Outcome, SkipReason};
pub use probe::{index_var, ProbeRunner};
pub use project::{render_pyproject, ScratchProject};
pub use report::Tally;
