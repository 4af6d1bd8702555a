//! Command-line interface for php-quality-gate.
//!
//! The gate's surface is a single positional argument: a commit ref that,
//! when truthy, triggers an advisory review of that commit. When the
//! argument is absent — or literally falsy (`""` or `"0"`) — the tool
//! performs no action at all. This quirk is part of the contract:
//! a falsy first argument disables the gate entirely.

use crate::config::RunConfig;
use crate::core::error::Result;
use crate::core::git::GitRepo;
use crate::core::runner::GateController;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Pre-commit code quality gate for PHP projects.
#[derive(Debug, Parser)]
#[command(
    name = "phpqg",
    author,
    version,
    about = "Pre-commit code quality gate for PHP projects",
    long_about = r#"Pre-commit code quality gate for PHP projects.

php-quality-gate (phpqg) runs a fixed sequence of checks over the files
changed in a commit: composer.json/composer.lock consistency, PHP syntax
lint, the project's code style script, and PHPMD static analysis.

Given a commit ref, the gate reviews master...<ref> in advisory mode:
failures are reported but the exit status stays zero. Without an argument
(or with a falsy one) the gate does nothing. Blocking pre-commit runs
against the staged index are available through the library API.
"#
)]
pub struct Cli {
    /// Commit ref to review against master. Omitted, "" or "0" disables
    /// the gate.
    pub commit: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Use color output.
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Always use color.
    Always,
    /// Auto-detect color support.
    #[default]
    Auto,
    /// Never use color.
    Never,
}

/// Runs the CLI.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    setup_color(cli.color);

    let Some(commit) = cli.commit else {
        return Ok(ExitCode::SUCCESS);
    };

    if !is_truthy(&commit) {
        return Ok(ExitCode::SUCCESS);
    }

    let repo = GitRepo::discover()?;
    let config = RunConfig::new(repo.root(), Some(commit));

    // Advisory review: check failures are reported but never block. The
    // escalated static-analysis failure and VCS errors still propagate.
    GateController::new(config).run()?;

    Ok(ExitCode::SUCCESS)
}

/// PHP truthiness for a CLI string: empty and "0" are falsy.
fn is_truthy(arg: &str) -> bool {
    !matches!(arg, "" | "0")
}

/// Sets up logging based on verbosity flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Sets up color output.
fn setup_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        ColorChoice::Auto => {
            // Let console crate auto-detect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_argument() {
        let cli = Cli::try_parse_from(["phpqg"]).expect("parse");
        assert_eq!(cli.commit, None);
    }

    #[test]
    fn test_parse_commit_ref() {
        let cli = Cli::try_parse_from(["phpqg", "feature"]).expect("parse");
        assert_eq!(cli.commit.as_deref(), Some("feature"));
    }

    #[test]
    fn test_parse_falsy_argument_is_still_parsed() {
        // The disable decision is made after parsing, not by clap.
        let cli = Cli::try_parse_from(["phpqg", "0"]).expect("parse");
        assert_eq!(cli.commit.as_deref(), Some("0"));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(is_truthy("1"));
        assert!(is_truthy("feature"));
        // PHP string truthiness: only "" and "0" are falsy.
        assert!(is_truthy("false"));
        assert!(is_truthy("00"));
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::try_parse_from(["phpqg", "-v", "feature"]).expect("parse");
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_quiet_flag() {
        let cli = Cli::try_parse_from(["phpqg", "--quiet"]).expect("parse");
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_color_choices() {
        let cli = Cli::try_parse_from(["phpqg", "--color", "never"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Never);

        let cli = Cli::try_parse_from(["phpqg", "--color", "always"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Always);

        let cli = Cli::try_parse_from(["phpqg"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_parse_help_exits_early() {
        assert!(Cli::try_parse_from(["phpqg", "--help"]).is_err());
    }

    #[test]
    fn test_parse_version_exits_early() {
        assert!(Cli::try_parse_from(["phpqg", "--version"]).is_err());
    }
}
