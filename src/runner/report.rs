//! Pass/fail/skip accounting and the final summary.

use crate::runner::outcome::Outcome;
use crate::ui::UserInterface;

/// Separator printed between registries and before the summary.
pub const SEPARATOR: &str = "----------------";

/// Guidance printed when no registry was actually tested.
pub const GUIDANCE: [&str; 4] = [
    "     * UV_TEST_<registry_name>_URL",
    "     * UV_TEST_<registry_name>_TOKEN",
    "     * UV_TEST_<package_name>_PKG (the private package to test installing)",
    "     * UV_TEST_<registry_name>_USERNAME (defaults to \"__token__\")",
];

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one registry's outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_skipped() {
            self.skipped += 1;
        } else if outcome.succeeded() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Registries actually tested (skips excluded).
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// `Results: <passed>/<total> tests passed, <skipped> skipped`
    pub fn summary_line(&self) -> String {
        format!(
            "Results: {}/{} tests passed, {} skipped",
            self.passed,
            self.total(),
            self.skipped
        )
    }

    /// Exit code for the run: 1 if nothing was tested or anything failed.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 || self.failed > 0 {
            1
        } else {
            0
        }
    }

    /// Print the summary, plus configuration guidance when nothing ran.
    pub fn print_summary(&self, ui: &mut dyn UserInterface) {
        ui.message(SEPARATOR);
        ui.summary(&format!("\n{}", self.summary_line()));

        if self.total() == 0 {
            ui.message("\nNo tests were run - have you defined at least one registry?");
            for line in GUIDANCE {
                ui.message(line);
            }
        }
    }
}
