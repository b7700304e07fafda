//! [`GitBackend`] backed by the system `git` binary.
//!
//! Mutating operations shell out to `git` so the user's config, hooks, SSH
//! agent, and credential store apply. Discovery and HEAD resolution go
//! through git2.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::GitError;
use crate::git::GitBackend;
use crate::git::status::{NameStatusEntry, parse_name_status, parse_short_status};

/// A working tree driven through the `git` command line.
pub struct GitCli {
    repo: Repository,
    workdir: PathBuf,
}

impl GitCli {
    /// Discover the repository containing `path`.
    ///
    /// Every command runs with the repository's working tree as its current
    /// directory; the process working directory is left alone.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo = Repository::discover(path.as_ref()).map_err(GitError::NotARepository)?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::BareRepository)?
            .to_path_buf();

        debug!("Using repository at {}", workdir.display());

        Ok(Self { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run a git command in the working tree and return its stdout.
    fn run_git<I, S>(&self, args: I, operation: &str) -> Result<String, GitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.workdir);
        debug!("Running {:?}", cmd);

        let output = cmd.output().map_err(|source| GitError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                operation: operation.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitBackend for GitCli {
    fn reset_index(&self) -> Result<(), GitError> {
        self.run_git(["reset", "--quiet"], "reset").map(|_| ())
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.run_git(["add", "-A"], "add").map(|_| ())
    }

    fn staged_changes(&self) -> Result<Vec<NameStatusEntry>, GitError> {
        let output = self.run_git(
            ["-c", "core.quotePath=false", "diff", "--cached", "--name-status"],
            "diff --cached",
        )?;
        Ok(parse_name_status(&output))
    }

    fn short_status(&self) -> Result<Vec<String>, GitError> {
        let output = self.run_git(["status", "--short"], "status")?;
        Ok(parse_short_status(&output))
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        let mut file = NamedTempFile::new().map_err(GitError::MessageFile)?;
        file.write_all(message.as_bytes())
            .and_then(|()| file.flush())
            .map_err(GitError::MessageFile)?;

        let args: [&OsStr; 3] = ["commit".as_ref(), "-F".as_ref(), file.path().as_os_str()];
        self.run_git(args, "commit").map(|_| ())
    }

    fn head_short_hash(&self) -> Result<String, GitError> {
        let commit = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map_err(GitError::HeadUnresolved)?;
        let short = commit
            .as_object()
            .short_id()
            .map_err(GitError::HeadUnresolved)?;

        Ok(short.as_str().unwrap_or_default().to_string())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        self.run_git(["push", remote, branch], "push").map(|_| ())
    }
}
