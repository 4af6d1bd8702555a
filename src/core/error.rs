//! Error types for php-quality-gate.
//!
//! This module defines all errors that can occur during a gate run.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in php-quality-gate.
///
/// Note that a check tool reporting violations is *not* an error: it is
/// recorded as a failed check result. Only the escalated static-analysis
/// failure and the final blocking decision surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Version control errors
    // =========================================================================
    /// Not in a Git repository.
    #[error("Not in a Git repository")]
    NotGitRepo,

    /// Git invocation failed; no check can proceed without a change set.
    #[error("Git operation failed: {operation} - {message}")]
    Vcs {
        /// Name of the operation that failed.
        operation: String,
        /// Error message.
        message: String,
    },

    // =========================================================================
    // I/O errors
    // =========================================================================
    /// File or process I/O error.
    #[error("I/O error: {message}")]
    Io {
        /// Description of what failed.
        message: String,
        /// Source error.
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Gate decisions
    // =========================================================================
    /// The static-analysis check failed and was escalated. Unlike the other
    /// checks this aborts the whole invocation; the message doubles as the
    /// failure banner.
    #[error(" -- Code Quality Check: FAILED! -- ")]
    AnalysisFailed,

    /// The gate failed in blocking pre-commit mode.
    #[error(" -- CANNOT COMMIT! --")]
    CannotCommit,
}

impl Error {
    /// Creates a new I/O error with context.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Creates a new Git operation error.
    pub fn vcs(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Vcs {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Returns an exit code appropriate for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotGitRepo | Self::Vcs { .. } => 65, // EX_DATAERR
            _ => 1,
        }
    }
}
