//! Preflight checks run before touching the index.

use std::path::Path;

use tracing::debug;

use crate::error::GitError;
use crate::git::GitCli;

/// Check that the `git` binary is on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    match which::which("git") {
        Ok(path) => {
            debug!("git found at {}", path.display());
            Ok(())
        }
        Err(_) => Err(GitError::NotInstalled),
    }
}

/// Verify git is available and open the repository containing `path`.
pub fn open_repository(path: &Path) -> Result<GitCli, GitError> {
    check_git_installed()?;
    GitCli::open(path)
}
