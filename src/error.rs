//! Error types for autopush modules using thiserror.

use thiserror::Error;

/// Errors from the repository interface.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH. Install git and try again.")]
    NotInstalled,

    #[error("Not a git repository: {0}")]
    NotARepository(#[source] git2::Error),

    #[error("Bare repositories are not supported (no working tree)")]
    BareRepository,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },

    #[error("Failed to write commit message file: {0}")]
    MessageFile(#[source] std::io::Error),

    #[error("Could not resolve HEAD: {0}")]
    HeadUnresolved(#[source] git2::Error),
}

/// Errors from the ship pipeline.
#[derive(Error, Debug)]
pub enum ShipError {
    #[error("No changes to commit")]
    NoStagedChanges,

    #[error("Commit failed: {0}")]
    CommitFailed(#[source] GitError),

    #[error("Push to {remote}/{branch} failed (the commit exists locally): {source}")]
    PushFailed {
        remote: String,
        branch: String,
        #[source]
        source: GitError,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}
