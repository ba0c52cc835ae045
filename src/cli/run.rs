//! The build-then-probe run.

use crate::cli::args::Cli;
use crate::cli::command::{Command, CommandResult};
use crate::config::{
    discover_from_env, resolve_timeout_from_env, RegistryConfig, Settings, Verbosity,
};
use crate::error::Result;
use crate::runner::{build, report::SEPARATOR, ProbeRunner, Tally};
use crate::ui::UserInterface;

/// Builds the tool once, then probes every discovered registry in turn.
pub struct RunCommand {
    settings: Settings,
    registries: Vec<RegistryConfig>,
}

impl RunCommand {
    /// Create a run over explicit settings and registries.
    pub fn new(settings: Settings, registries: Vec<RegistryConfig>) -> Self {
        Self {
            settings,
            registries,
        }
    }

    /// Resolve settings from the command line and discover registries from
    /// the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = Settings {
            timeout: resolve_timeout_from_env(cli.timeout)?,
            verbosity: Verbosity(cli.verbose),
            cargo: cli.cargo.clone(),
        };
        tracing::debug!("Resolved settings: {:?}", settings);

        Ok(Self::new(settings, discover_from_env()))
    }

    /// Probe every registry, printing each result, and return the counts.
    pub fn probe_all(&self, ui: &mut dyn UserInterface) -> Tally {
        let mut runner = ProbeRunner::new(self.settings.clone());
        let mut tally = Tally::new();

        for registry in &self.registries {
            ui.message(SEPARATOR);
            let outcome = runner.probe(registry, ui);
            tally.record(&outcome);
        }

        tally
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Building...");
        if let Err(e) = build(&self.settings.cargo) {
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(1));
        }

        ui.message("Running tests...");
        let tally = self.probe_all(ui);
        tally.print_summary(ui);

        tracing::debug!("Run finished: {:?}", tally);
        Ok(CommandResult::from_exit_code(tally.exit_code()))
    }
}
