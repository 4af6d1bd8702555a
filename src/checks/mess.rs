//! Static analysis check (PHP Mess Detector).
//!
//! Runs `bin/phpmd <file> text <ruleset>` from the project root for every
//! changed PHP source. Like the syntax check this never short-circuits,
//! but its failure is escalated by the controller: a mess-detector
//! violation aborts the whole invocation.

use crate::checks::{is_php_source, Check, CheckResult};
use crate::config::RunConfig;
use crate::core::changes::ChangeSet;
use crate::core::executor::Executor;
use console::style;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Mess-detector binary, relative to the project root.
pub const PHPMD_BIN: &str = "bin/phpmd";

/// Rule configuration, relative to the project's sibling directory.
pub const RULESET: &str = "../PHPCodeQuality/ruleset/ruleset.xml";

/// Output format selector passed to the tool.
const OUTPUT_FORMAT: &str = "text";

/// Runs the external rule-based static analyzer per changed PHP source.
#[derive(Debug)]
pub struct StaticAnalysisCheck {
    tool: PathBuf,
}

impl Default for StaticAnalysisCheck {
    fn default() -> Self {
        Self {
            tool: PHPMD_BIN.into(),
        }
    }
}

impl StaticAnalysisCheck {
    /// Uses a specific analyzer binary instead of `bin/phpmd`.
    #[must_use]
    pub fn with_tool(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }
}

impl Check for StaticAnalysisCheck {
    fn name(&self) -> &'static str {
        "phpmd"
    }

    fn label(&self) -> &'static str {
        "Running PHPMD"
    }

    // The failure banner is raised by the controller's escalation, not
    // printed as a headline here.
    fn failure_headline(&self, _result: &CheckResult) -> Option<String> {
        None
    }

    fn fatal(&self) -> bool {
        true
    }

    fn matches(&self, path: &str) -> bool {
        is_php_source(path)
    }

    fn run(&self, config: &RunConfig, changes: &ChangeSet) -> CheckResult {
        let executor = Executor::new();
        let mut succeeded = true;
        let mut diagnostic = String::new();

        for file in changes.paths().filter(|p| self.matches(p)) {
            let outcome = executor.run(
                &self.tool,
                [file, OUTPUT_FORMAT, RULESET],
                Some(config.project_root()),
            );

            match outcome {
                Ok(output) if output.success() => {}
                Ok(output) => {
                    let stderr = output.stderr.trim();
                    let stdout = output.stdout.trim();
                    println!("{file}");
                    println!("{}", style(stderr).red());
                    println!("{}", style(stdout).cyan());
                    let _ = writeln!(diagnostic, "{file}\n{stderr}\n{stdout}");
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

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::core::changes::ChangedFile;
    use std::path::Path;

    fn changes(paths: &[&str]) -> ChangeSet {
        ChangeSet::from_files(
            paths
                .iter()
                .map(|p| ChangedFile {
                    action: 'A',
                    path: (*p).to_string(),
                })
                .collect(),
        )
    }

    /// Stand-in analyzer that records its working directory and arguments.
    fn write_tool(dir: &Path, log: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-phpmd");
        let script = format!(
            "#!/bin/sh\necho \"$(pwd)|$@\" >> \"{}\"\n{body}\n",
            log.display()
        );
        std::fs::write(&path, script).expect("write tool");

        let mut perms = std::fs::metadata(&path).expect("tool metadata").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("set tool perms");

        path
    }

    fn read_log(log: &Path) -> Vec<String> {
        match std::fs::read_to_string(log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    #[test]
    fn test_invokes_tool_only_for_php_sources() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let log = temp.path().join("invocations.log");
        let tool = write_tool(temp.path(), &log, "exit 0");

        let check = StaticAnalysisCheck::with_tool(&tool);
        let config = RunConfig::new(temp.path(), None);
        let result = check.run(&config, &changes(&["src/Foo.php", "lib/b.inc", "notes.txt"]));

        assert!(result.passed);
        let invocations = read_log(&log);
        assert_eq!(invocations.len(), 1);
        assert!(invocations[0].contains("src/Foo.php"));
    }

    #[test]
    fn test_argument_contract_and_working_directory() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let log = temp.path().join("invocations.log");
        let tool = write_tool(temp.path(), &log, "exit 0");

        let check = StaticAnalysisCheck::with_tool(&tool);
        let config = RunConfig::new(temp.path(), None);
        check.run(&config, &changes(&["src/Foo.php"]));

        let invocations = read_log(&log);
        let (cwd, args) = invocations[0].split_once('|').expect("log format");

        let expected_cwd = temp.path().canonicalize().expect("canonicalize temp");
        let actual_cwd = PathBuf::from(cwd).canonicalize().expect("canonicalize cwd");
        assert_eq!(actual_cwd, expected_cwd);
        assert_eq!(
            args,
            "src/Foo.php text ../PHPCodeQuality/ruleset/ruleset.xml"
        );
    }

    #[test]
    fn test_failure_does_not_short_circuit() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let log = temp.path().join("invocations.log");
        let tool = write_tool(
            temp.path(),
            &log,
            "echo 'Avoid unused local variables' \necho 'rule hint' >&2\nexit 2",
        );

        let check = StaticAnalysisCheck::with_tool(&tool);
        let config = RunConfig::new(temp.path(), None);
        let result = check.run(&config, &changes(&["a.php", "b.php"]));

        assert!(!result.passed);
        assert_eq!(read_log(&log).len(), 2);
        assert!(result.diagnostic.contains("Avoid unused local variables"));
        assert!(result.diagnostic.contains("rule hint"));
    }

    #[test]
    fn test_missing_tool_is_a_check_failure() {
        let temp = tempfile::TempDir::new().expect("create temp dir");
        let check = StaticAnalysisCheck::with_tool("/nonexistent/phpmd");
        let config = RunConfig::new(temp.path(), None);

        let result = check.run(&config, &changes(&["a.php"]));
        assert!(!result.passed);
    }

    #[test]
    fn test_is_fatal() {
        assert!(StaticAnalysisCheck::default().fatal());
    }
}
