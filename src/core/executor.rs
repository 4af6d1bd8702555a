//! Synchronous execution of external check tools.
//!
//! Every tool the gate drives is a blocking call that runs to completion
//! before the next begins. No timeout is applied: a hung tool hangs the
//! gate (accepted limitation of the design).

use crate::core::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Output from a command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code of the command.
    pub exit_code: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns true if the command succeeded (exit code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns combined stdout and stderr output.
    #[must_use]
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Executor for running external tools.
#[derive(Debug, Default)]
pub struct Executor;

impl Executor {
    /// Creates a new executor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs a program with the given arguments, capturing its output.
    ///
    /// A spawn failure (binary missing or not executable) is returned as an
    /// error; callers that treat it as a check failure fold it into their
    /// result rather than propagating it.
    pub fn run<I, S>(
        &self,
        program: impl AsRef<OsStr>,
        args: I,
        cwd: Option<&Path>,
    ) -> Result<CommandOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program = program.as_ref();

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        tracing::debug!(command = %program.to_string_lossy(), "running external tool");

        let output = cmd
            .output()
            .map_err(|e| Error::io(format!("run {}", program.to_string_lossy()), e))?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
