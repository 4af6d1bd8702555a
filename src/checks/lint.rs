//! PHP syntax check.
//!
//! Runs `php -l` against every lintable changed file. The loop never
//! short-circuits: one run must surface every syntax error at once, not
//! just the first.

use crate::checks::{is_lintable, Check, CheckResult};
use crate::config::RunConfig;
use crate::core::changes::ChangeSet;
use crate::core::executor::Executor;
use console::style;
use std::ffi::OsStr;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Lints changed PHP sources with the language's own syntax checker.
#[derive(Debug)]
pub struct SyntaxCheck {
    php: PathBuf,
}

impl Default for SyntaxCheck {
    fn default() -> Self {
        Self { php: "php".into() }
    }
}

impl SyntaxCheck {
    /// Uses a specific PHP binary instead of `php` from PATH.
    #[must_use]
    pub fn with_php(php: impl Into<PathBuf>) -> Self {
        Self { php: php.into() }
    }
}

impl Check for SyntaxCheck {
    fn name(&self) -> &'static str {
        "phplint"
    }

    fn label(&self) -> &'static str {
        "Running PHPLint"
    }

    fn failure_headline(&self, _result: &CheckResult) -> Option<String> {
        Some("There are some PHP syntax errors!".to_string())
    }

    fn matches(&self, path: &str) -> bool {
        is_lintable(path)
    }

    fn run(&self, config: &RunConfig, changes: &ChangeSet) -> CheckResult {
        let executor = Executor::new();
        let mut succeeded = true;
        let mut diagnostic = String::new();

        for file in changes.paths().filter(|p| self.matches(p)) {
            let target = config.project_root().join(file);

            match executor.run(&self.php, [OsStr::new("-l"), target.as_os_str()], None) {
                Ok(output) if output.success() => {}
                Ok(output) => {
                    let stderr = output.stderr.trim();
                    println!("{file}");
                    println!("{}", style(stderr).red());
                    let _ = writeln!(diagnostic, "{file}\n{stderr}");
                    succeeded = false;
                }
                Err(e) => {
                    println!("{file}");
                    println!("{}", style(&e).red());
                    let _ = writeln!(diagnostic, "{file}\n{e}");
                    succeeded = false;
                }
            }
        }

        if succeeded {
            CheckResult::pass(self.name())
        } else {
            CheckResult::fail(self.name(), diagnostic)
        }
    }
}
