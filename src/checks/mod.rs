//! The gate's checks.
//!
//! Each check is an instance of the [`Check`] capability: a file
//! predicate, an invocation against the change set, and an interpretation
//! of the outcome. The controller's loop only sees this trait, so adding
//! a check never touches the control flow.

pub mod composer;
pub mod lint;
pub mod mess;
pub mod style;

pub use composer::DependencyLockCheck;
pub use lint::SyntaxCheck;
pub use mess::StaticAnalysisCheck;
pub use style::StyleCheck;

use crate::config::RunConfig;
use crate::core::changes::ChangeSet;
use regex::Regex;
use std::sync::LazyLock;

static LINTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.php|\.inc)$").expect("pattern is valid"));

static PHP_SOURCES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.php$").expect("pattern is valid"));

/// Returns true for paths the syntax check lints (`.php` and `.inc`).
#[must_use]
pub fn is_lintable(path: &str) -> bool {
    LINTABLE.is_match(path)
}

/// Returns true for PHP source files only (the stricter static-analysis
/// predicate).
#[must_use]
pub fn is_php_source(path: &str) -> bool {
    PHP_SOURCES.is_match(path)
}

/// Result of running a single check.
///
/// Created when the check finishes and immutable afterwards.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: &'static str,
    /// Whether the check passed.
    pub passed: bool,
    /// Captured diagnostic text (tool output, or a raw message for
    /// non-process checks). Empty on pass.
    pub diagnostic: String,
}

impl CheckResult {
    /// Creates a passing result.
    #[must_use]
    pub fn pass(name: &'static str) -> Self {
        Self {
            name,
            passed: true,
            diagnostic: String::new(),
        }
    }

    /// Creates a failing result with captured diagnostics.
    #[must_use]
    pub fn fail(name: &'static str, diagnostic: impl Into<String>) -> Self {
        Self {
            name,
            passed: false,
            diagnostic: diagnostic.into(),
        }
    }
}

/// One check of the gate.
pub trait Check: std::fmt::Debug {
    /// Short identifier recorded in results.
    fn name(&self) -> &'static str;

    /// Progress line printed before the check runs.
    fn label(&self) -> &'static str;

    /// Headline printed when the check fails, or `None` when the failure
    /// is reported through another channel.
    fn failure_headline(&self, result: &CheckResult) -> Option<String>;

    /// Whether a failure aborts the whole invocation instead of being
    /// recorded. Only the static-analysis check escalates.
    fn fatal(&self) -> bool {
        false
    }

    /// Per-file relevance predicate. Checks that inspect the whole change
    /// set (or ignore it) keep the default.
    fn matches(&self, _path: &str) -> bool {
        true
    }

    /// Runs the check against the change set.
    ///
    /// Tool-invocation problems (binary missing, not executable) are a
    /// check failure, not a program fault, and are folded into the result.
    fn run(&self, config: &RunConfig, changes: &ChangeSet) -> CheckResult;
}
