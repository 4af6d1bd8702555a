//! The set of files affected by the commit under test.
//!
//! A [`ChangeSet`] is resolved once per run from git's name-status output
//! and is the only input the checks share. Paths are relative to the
//! project root; duplicates and ordering mirror the git output verbatim.

use crate::config::RunConfig;
use crate::core::error::Result;
use crate::core::git::GitRepo;

/// One changed file: a single-character action code and a relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Git status code (A/C/M by construction of the diff filter).
    pub action: char,
    /// Path relative to the project root.
    pub path: String,
}

impl ChangedFile {
    /// Parses one name-status line: first character is the action code,
    /// the trimmed remainder is the path.
    ///
    /// The parse is purely positional; no escaping of exotic filenames is
    /// attempted. This mirrors the underlying VCS output contract and must
    /// not be hardened.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let action = line.chars().next()?;
        let path = line[action.len_utf8()..].trim().to_string();
        Some(Self { action, path })
    }
}

/// Ordered list of changed files, as reported by the VCS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<ChangedFile>,
}

impl ChangeSet {
    /// Resolves the change set for the configured run.
    ///
    /// Each raw diff line is echoed to the console before parsing, so the
    /// operator can see exactly what the gate is evaluating.
    pub fn resolve(repo: &GitRepo, config: &RunConfig) -> Result<Self> {
        let raw = repo.diff_name_status(config.commit(), config.baseline())?;

        let mut files = Vec::new();
        for line in raw.lines() {
            println!("{line}");
            if let Some(file) = ChangedFile::parse(line) {
                files.push(file);
            }
        }

        tracing::debug!(files = files.len(), "change set resolved");

        Ok(Self { files })
    }

    /// Builds a change set from already-parsed entries.
    #[must_use]
    pub fn from_files(files: Vec<ChangedFile>) -> Self {
        Self { files }
    }

    /// Iterates over the changed files in VCS order.
    pub fn iter(&self) -> impl Iterator<Item = &ChangedFile> {
        self.files.iter()
    }

    /// Iterates over the changed paths in VCS order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    /// Returns true if the exact path appears in the change set.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    /// Number of entries (duplicates are not collapsed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
