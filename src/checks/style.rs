//! Code style check.
//!
//! Delegates to the project's own style script under the git hook
//! directory. The contract is output-based: the script passing means it
//! printed nothing. Its exit code is deliberately not consulted, so "tool
//! produced output" and "tool found violations" stay coupled exactly as
//! the script's consumers expect.

use crate::checks::{Check, CheckResult};
use crate::config::RunConfig;
use crate::core::changes::ChangeSet;
use crate::core::executor::Executor;
use console::style;
use std::ffi::OsStr;

/// Runs the fixed style-check script with no arguments.
#[derive(Debug, Default)]
pub struct StyleCheck;

impl Check for StyleCheck {
    fn name(&self) -> &'static str {
        "codestyle"
    }

    fn label(&self) -> &'static str {
        "Running Code Style"
    }

    fn failure_headline(&self, result: &CheckResult) -> Option<String> {
        Some(style(result.diagnostic.trim()).red().to_string())
    }

    // The change set is ignored: the script decides its own scope.
    fn run(&self, config: &RunConfig, _changes: &ChangeSet) -> CheckResult {
        let script = config.style_script();
        let executor = Executor::new();

        match executor.run(&script, std::iter::empty::<&OsStr>(), None) {
            Ok(output) => {
                let combined = output.combined_output();
                if combined.trim().is_empty() {
                    CheckResult::pass(self.name())
                } else {
                    print!("{combined}");
                    CheckResult::fail(self.name(), combined)
                }
            }
            Err(e) => CheckResult::fail(self.name(), e.to_string()),
        }
    }
}
