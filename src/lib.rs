//! # php-quality-gate
//!
//! A pre-commit quality gate for PHP projects. The gate inspects the files
//! changed in a commit (or the staged index), runs a fixed sequence of
//! checks — composer lock consistency, PHP syntax lint, the project's code
//! style script, and PHPMD static analysis — and aggregates the results
//! into a single decision that blocks or allows the commit.
//!
//! The gate is a thin coordinator over external tools: every invocation is
//! a blocking call, the pipeline order is fixed, and nothing survives a
//! single run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use php_quality_gate::{GateController, GitRepo, RunConfig};
//!
//! fn main() -> php_quality_gate::Result<()> {
//!     let repo = GitRepo::discover()?;
//!
//!     // Blocking pre-commit run against the staged index. A failing gate
//!     // surfaces as Error::CannotCommit.
//!     let config = RunConfig::new(repo.root(), None);
//!     let outcome = GateController::new(config).run()?;
//!
//!     assert!(outcome.passed);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/php-quality-gate/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod checks;
pub mod cli;
pub mod config;
pub mod core;

// Re-export main types for convenience
pub use checks::{Check, CheckResult};
pub use config::RunConfig;
pub use core::changes::{ChangeSet, ChangedFile};
pub use core::error::{Error, Result};
pub use core::git::GitRepo;
pub use core::runner::{GateController, GateOutcome, GateReport};
