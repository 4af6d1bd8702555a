//! Dependency-lock consistency check.
//!
//! Committing an edited `composer.json` without the regenerated
//! `composer.lock` desynchronizes reproducible installs, so the gate
//! refuses that combination. Pure change-set inspection; no process is
//! invoked.

use crate::checks::{Check, CheckResult};
use crate::config::RunConfig;
use crate::core::changes::ChangeSet;

/// Dependency manifest sentinel.
pub const MANIFEST: &str = "composer.json";

/// Dependency lock-file sentinel.
pub const LOCKFILE: &str = "composer.lock";

/// Fails when the manifest changed without its lock file.
#[derive(Debug, Default)]
pub struct DependencyLockCheck;

impl Check for DependencyLockCheck {
    fn name(&self) -> &'static str {
        "composer"
    }

    fn label(&self) -> &'static str {
        "Checking composer"
    }

    fn failure_headline(&self, _result: &CheckResult) -> Option<String> {
        Some("composer.lock must be committed if composer.json is modified!".to_string())
    }

    fn run(&self, _config: &RunConfig, changes: &ChangeSet) -> CheckResult {
        let manifest_detected = changes.contains_path(MANIFEST);
        let lockfile_detected = changes.contains_path(LOCKFILE);

        if manifest_detected && !lockfile_detected {
            CheckResult::fail(self.name(), "composer.json modified without composer.lock")
        } else {
            CheckResult::pass(self.name())
        }
    }
}
