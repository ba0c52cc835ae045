//! Probing a single registry with `add`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{Readiness, RegistryConfig, Settings};
use crate::runner::outcome::{FailReason, Outcome, SkipReason, UNKNOWN_ERROR};
use crate::runner::project::ScratchProject;
use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

/// Name of the `UV_INDEX_<NAME>_<SUFFIX>` variable the tool reads credentials from.
pub fn index_var(registry: &RegistryConfig, suffix: &str) -> String {
    format!("UV_INDEX_{}_{}", registry.env_name(), suffix)
}

/// Runs `add` against registries one at a time.
///
/// Credentials injected for one registry stay in the environment handed to
/// every later invocation of the same run.
#[derive(Debug)]
pub struct ProbeRunner {
    settings: Settings,
    credentials: BTreeMap<String, String>,
}

impl ProbeRunner {
    /// Create a runner with no credentials injected yet.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            credentials: BTreeMap::new(),
        }
    }

    /// Credential variables injected so far.
    pub fn credentials(&self) -> &BTreeMap<String, String> {
        &self.credentials
    }

    /// Arguments for `<cargo> run -- add ...` against `dir`.
    pub fn add_args(&self, registry: &RegistryConfig, package: &str, dir: &Path) -> Vec<String> {
        let mut args: Vec<String> = ["run", "--", "add", package, "--index", registry.name.as_str()]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.push("--directory".to_string());
        args.push(dir.display().to_string());
        if let Some(flag) = self.settings.verbosity.tool_flag() {
            args.push(flag.to_string());
        }
        args
    }

    /// Probe `registry`, print its status line and return the outcome.
    pub fn probe(&mut self, registry: &RegistryConfig, ui: &mut dyn UserInterface) -> Outcome {
        let outcome = self.run(registry, ui);
        self.report(registry, &outcome, ui);
        outcome
    }

    fn run(&mut self, registry: &RegistryConfig, ui: &mut dyn UserInterface) -> Outcome {
        let (token, package) = match (registry.readiness(), &registry.token, &registry.package) {
            (Readiness::Ready, Some(token), Some(package)) => (token, package),
            (Readiness::MissingPackage, ..) => return Outcome::Skipped(SkipReason::MissingPackage),
            _ => return Outcome::Skipped(SkipReason::MissingToken),
        };

        ui.message(&format!(
            "{} -- Running test for {} with username {}",
            registry.name, registry.url, registry.username
        ));
        ui.message(&format!("\nAttempting to install {}", package));

        self.credentials
            .insert(index_var(registry, "USERNAME"), registry.username.clone());
        self.credentials
            .insert(index_var(registry, "PASSWORD"), token.clone());

        let project = match ScratchProject::create(registry) {
            Ok(project) => project,
            Err(e) => {
                return Outcome::Error {
                    message: e.to_string(),
                }
            }
        };

        let args = self.add_args(registry, package, project.path());
        let options = CommandOptions {
            env: self.credentials.clone(),
            timeout: Some(self.settings.timeout),
            ..Default::default()
        };

        match execute(&self.settings.cargo, &args, &options) {
            Ok(result) => Outcome::classify(package, &result, self.settings.timeout),
            Err(e) => Outcome::Error {
                message: e.to_string(),
            },
        }
        // `project` drops here, removing the scratch directory.
    }

    fn report(&self, registry: &RegistryConfig, outcome: &Outcome, ui: &mut dyn UserInterface) {
        let kind = outcome.status_kind();
        let name = registry.name.as_str();

        match outcome {
            Outcome::Pass { installed, stderr } => {
                ui.status(name, kind, Some(installed.trim()));
                if self.settings.verbosity.shows_output() {
                    ui.detail("stderr:", stderr);
                }
            }
            Outcome::Fail(FailReason::ExitCode { stderr, .. }) => {
                let detail = if stderr.is_empty() {
                    UNKNOWN_ERROR
                } else {
                    stderr.as_str()
                };
                ui.status(name, kind, Some(detail));
            }
            Outcome::Fail(FailReason::NotInstalled { package, stderr }) => {
                ui.status(name, kind, Some(&format!("Failed to install {}.", package)));
                if !stderr.is_empty() {
                    ui.detail("stderr:", stderr);
                }
            }
            Outcome::Timeout { after } => {
                ui.status(name, kind, Some(&format!("(>{}s)", after.as_secs())));
            }
            Outcome::Error { message } => ui.status(name, kind, Some(message)),
            Outcome::Skipped(SkipReason::MissingToken) => ui.status(
                name,
                kind,
                Some(&format!(
                    "{} contained no token. Skipping test",
                    registry.test_var("TOKEN")
                )),
            ),
            Outcome::Skipped(SkipReason::MissingPackage) => ui.status(
                name,
                kind,
                Some(&format!(
                    "{} contained no private package name to install. Skipping test",
                    registry.test_var("PKG")
                )),
            ),
        }
    }
}
