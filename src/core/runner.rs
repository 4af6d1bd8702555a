//! The gate controller.
//!
//! Orchestrates one run: resolve the change set, run the checks in fixed
//! order, aggregate pass/fail, and decide whether the commit may proceed.
//! Every check is attempted regardless of prior failures, so a single run
//! reports everything at once. The sole exception is the static-analysis
//! check, whose failure aborts the invocation immediately; the FAILED
//! banner lives in that error's message, so the controller's own banner
//! path stays unreachable for that case.

use crate::checks::{
    Check, CheckResult, DependencyLockCheck, StaticAnalysisCheck, StyleCheck, SyntaxCheck,
};
use crate::config::RunConfig;
use crate::core::changes::ChangeSet;
use crate::core::error::{Error, Result};
use crate::core::git::GitRepo;
use console::style;

/// Mutable accumulator for one run, owned by the controller.
#[derive(Debug, Default)]
pub struct GateReport {
    results: Vec<CheckResult>,
}

impl GateReport {
    fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Returns the recorded results in check order.
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Returns true if any recorded check failed.
    #[must_use]
    pub fn has_failure(&self) -> bool {
        self.results.iter().any(|r| !r.passed)
    }
}

/// Aggregate outcome of one gate run.
///
/// Computed once at the end of the run and consumed immediately to decide
/// exit behavior; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateOutcome {
    /// True iff every check passed.
    pub passed: bool,
    /// True for advisory commit-review runs, which never block.
    pub advisory: bool,
}

/// Runs the fixed sequence of checks and renders the verdict.
#[derive(Debug)]
pub struct GateController {
    config: RunConfig,
    checks: Vec<Box<dyn Check>>,
}

impl GateController {
    /// Creates a controller with the standard check sequence:
    /// composer, PHPLint, code style, PHPMD.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(DependencyLockCheck),
            Box::new(SyntaxCheck::default()),
            Box::new(StyleCheck),
            Box::new(StaticAnalysisCheck::default()),
        ];
        Self { config, checks }
    }

    /// Returns the run configuration.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the whole gate: change-set resolution followed by the checks.
    pub fn run(&self) -> Result<GateOutcome> {
        println!(
            "{}",
            style(" -- PHP Code Quality Check -- ")
                .white()
                .on_cyan()
                .bold()
        );
        println!("{}", style("Fetching files").cyan());

        let repo = GitRepo::open(self.config.project_root());
        let changes = ChangeSet::resolve(&repo, &self.config)?;

        self.run_checks(&changes)
    }

    /// Runs the checks against an already-resolved change set.
    pub fn run_checks(&self, changes: &ChangeSet) -> Result<GateOutcome> {
        let mut report = GateReport::default();

        for check in &self.checks {
            println!("{}", style(check.label()).cyan());

            let result = check.run(&self.config, changes);

            if !result.passed {
                if let Some(headline) = check.failure_headline(&result) {
                    println!("{headline}");
                }
            }

            let escalate = !result.passed && check.fatal();
            report.record(result);

            if escalate {
                return Err(Error::AnalysisFailed);
            }
        }

        let outcome = GateOutcome {
            passed: !report.has_failure(),
            advisory: self.config.is_review(),
        };

        tracing::debug!(
            checks = report.results().len(),
            passed = outcome.passed,
            "gate aggregated"
        );

        if outcome.passed {
            println!(
                "{}",
                style(" -- Code Quality Check: PASSED! -- ")
                    .white()
                    .on_green()
                    .bold()
            );
        } else if outcome.advisory {
            println!(
                "{}",
                style(" -- Code Quality Check: FAILED! -- ")
                    .white()
                    .on_red()
                    .bold()
            );
        } else {
            return Err(Error::CannotCommit);
        }

        Ok(outcome)
    }
}
