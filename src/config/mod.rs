//! Run configuration for the gate.
//!
//! A [`RunConfig`] is the immutable value describing one invocation: the
//! project root, the optional commit ref under review, and the baseline
//! branch. The pipeline itself is fixed and is deliberately not
//! configurable.

use std::path::{Path, PathBuf};

/// Baseline branch for range-mode diffs.
pub const BASELINE_BRANCH: &str = "master";

/// Style-check script, relative to the project root.
pub const STYLE_SCRIPT: &str = ".git/hooks/codestyle.sh";

/// Immutable configuration for a single gate run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    project_root: PathBuf,
    commit: Option<String>,
    baseline: String,
}

impl RunConfig {
    /// Creates a run configuration.
    ///
    /// With a commit ref the gate runs in advisory commit-review mode
    /// against `master...<ref>`; without one it runs in blocking
    /// pre-commit mode against the staged index.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>, commit: Option<String>) -> Self {
        Self {
            project_root: project_root.into(),
            commit,
            baseline: BASELINE_BRANCH.to_string(),
        }
    }

    /// Returns the project root directory.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the commit ref under review, if any.
    #[must_use]
    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }

    /// Returns the baseline branch for range-mode diffs.
    #[must_use]
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Returns true when the run is an advisory review of an existing
    /// commit, which never blocks.
    #[must_use]
    pub fn is_review(&self) -> bool {
        self.commit.is_some()
    }

    /// Returns the absolute path of the style-check script.
    #[must_use]
    pub fn style_script(&self) -> PathBuf {
        self.project_root.join(STYLE_SCRIPT)
    }
}
