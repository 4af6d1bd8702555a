//! Core gate machinery: change-set resolution, process execution,
//! error types, and the controller.

pub mod changes;
pub mod error;
pub mod executor;
pub mod git;
pub mod runner;
