//! autopush - stage, commit, and push a working tree in one step.
//!
//! # Overview
//!
//! autopush stages every change in the repository, summarizes the staged
//! name-status listing, and commits with either a literal message or one
//! generated from the summary, then pushes to the configured branch.

pub mod commit;
pub mod error;
pub mod git;
pub mod ship;

// Re-export commonly used types
pub use commit::{ChangeSummary, CommitType, PathChange, StatusKind, collect, compose};
pub use error::{GitError, ShipError};
pub use git::{GitBackend, GitCli};
pub use ship::{ShipConfig, ShipOutcome, run_ship};
