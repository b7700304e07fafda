//! Reduction of staged name-status entries into a [`ChangeSummary`].

use std::collections::BTreeSet;
use std::fmt;

/// Kind of a staged change, derived from its name-status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    /// Copies, type changes, unmerged entries and anything unrecognized.
    Other,
}

impl StatusKind {
    /// Classify a status code. Rename codes carry a similarity score (`R100`).
    pub fn from_code(code: &str) -> Self {
        match code {
            "A" => StatusKind::Added,
            "M" => StatusKind::Modified,
            "D" => StatusKind::Deleted,
            c if c.starts_with('R') => StatusKind::Renamed,
            _ => StatusKind::Other,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Added => write!(f, "Added"),
            StatusKind::Modified => write!(f, "Modified"),
            StatusKind::Deleted => write!(f, "Deleted"),
            StatusKind::Renamed => write!(f, "Renamed"),
            StatusKind::Other => write!(f, "Other"),
        }
    }
}

/// A single staged path change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathChange {
    pub status: StatusKind,
    pub path: String,
}

impl PathChange {
    pub fn new(code: &str, path: &str) -> Self {
        Self {
            status: StatusKind::from_code(code),
            path: path.to_string(),
        }
    }

    /// First path segment; a top-level file is its own directory.
    pub fn top_level_dir(&self) -> &str {
        self.path.split('/').next().unwrap_or(self.path.as_str())
    }
}

/// Counts and locations of the staged changes.
///
/// `total` always equals `files.len()`. Entries with an empty path still
/// count toward their status bucket but never reach `files` or `dirs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub added: usize,
    pub modified: usize,
    pub deleted: usize,
    pub renamed: usize,
    pub total: usize,
    pub files: Vec<String>,
    pub dirs: BTreeSet<String>,
}

impl ChangeSummary {
    fn record(mut self, change: PathChange) -> Self {
        match change.status {
            StatusKind::Added => self.added += 1,
            StatusKind::Modified => self.modified += 1,
            StatusKind::Deleted => self.deleted += 1,
            StatusKind::Renamed => self.renamed += 1,
            StatusKind::Other => {}
        }

        if !change.path.is_empty() {
            self.dirs.insert(change.top_level_dir().to_string());
            self.files.push(change.path);
            self.total = self.files.len();
        }

        self
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Build a [`ChangeSummary`] from `(status code, path)` entries.
pub fn collect<I, C, P>(entries: I) -> ChangeSummary
where
    I: IntoIterator<Item = (C, P)>,
    C: AsRef<str>,
    P: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(code, path)| PathChange::new(code.as_ref(), path.as_ref()))
        .fold(ChangeSummary::default(), ChangeSummary::record)
}
