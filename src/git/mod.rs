//! Repository interface: staging, inspection, commit, and push.

pub mod cli;
pub mod status;

pub use cli::GitCli;
pub use status::{NameStatusEntry, parse_name_status, parse_short_status};

use crate::error::GitError;

/// Operations the ship pipeline needs from a repository.
///
/// [`GitCli`] is the real implementation; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
pub trait GitBackend {
    /// Unstage everything (`git reset`).
    fn reset_index(&self) -> Result<(), GitError>;

    /// Stage all changes, including deletions and untracked files (`git add -A`).
    fn stage_all(&self) -> Result<(), GitError>;

    /// Staged changes against HEAD as `(status code, path)` entries.
    fn staged_changes(&self) -> Result<Vec<NameStatusEntry>, GitError>;

    /// Lines of `git status --short`.
    fn short_status(&self) -> Result<Vec<String>, GitError>;

    /// Commit the index with the given message.
    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Abbreviated id of the commit HEAD points to.
    fn head_short_hash(&self) -> Result<String, GitError>;

    /// Push `branch` to `remote`.
    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError>;
}
