//! Git repository operations.
//!
//! This module provides repository discovery and the name-status diff
//! invocations the gate evaluates.

use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Represents a Git repository.
#[derive(Debug, Clone)]
pub struct GitRepo {
    /// Root directory of the repository (where .git is).
    root: PathBuf,
}

impl GitRepo {
    /// Discovers the Git repository from the current directory.
    pub fn discover() -> Result<Self> {
        Self::discover_from(&std::env::current_dir().map_err(|e| Error::io("get current dir", e))?)
    }

    /// Discovers the Git repository from a specific path.
    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(path)
            .output()
            .map_err(|e| Error::io("run git rev-parse", e))?;

        if !output.status.success() {
            return Err(Error::NotGitRepo);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let root = stdout
            .lines()
            .next()
            .map(PathBuf::from)
            .ok_or(Error::NotGitRepo)?;

        Ok(Self { root })
    }

    /// Opens a repository at a known root without probing it.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory of the repository.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the raw name-status diff output for the files under test.
    ///
    /// With a commit ref this compares `<baseline>...<commit>` (range mode);
    /// without one it compares the staged index against the last commit.
    /// Only added, copied and modified entries are requested: deleted files
    /// no longer exist and cannot be checked.
    pub fn diff_name_status(&self, commit: Option<&str>, baseline: &str) -> Result<String> {
        let mut args = vec!["diff".to_string()];
        match commit {
            Some(commit) => {
                args.push("--name-status".to_string());
                args.push("--diff-filter=ACM".to_string());
                args.push(format!("{baseline}...{commit}"));
            }
            None => {
                args.push("--cached".to_string());
                args.push("--name-status".to_string());
                args.push("--diff-filter=ACM".to_string());
            }
        }

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| Error::io("run git diff", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::vcs("diff", stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
