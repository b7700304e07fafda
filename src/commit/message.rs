//! Commit message composition from a [`ChangeSummary`].

use std::fmt;
use std::fmt::Write as _;

use chrono::{Local, NaiveDateTime};

use crate::commit::summary::ChangeSummary;

/// Message used when nothing with a path was staged.
pub const FALLBACK_MESSAGE: &str = "chore: Update project files";

/// strftime layout of the trailing timestamp line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SUBJECT: &str = "Update project files";

/// Conventional commit type picked for a generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Refactor,
    Chore,
}

impl CommitType {
    /// Pick the type for a summary.
    ///
    /// More additions than modifications is a feature; otherwise any deletion
    /// makes it a refactor. Renames never influence the choice.
    pub fn classify(summary: &ChangeSummary) -> Self {
        if summary.added > summary.modified {
            CommitType::Feat
        } else if summary.deleted > 0 {
            CommitType::Refactor
        } else {
            CommitType::Chore
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Refactor => "refactor",
            CommitType::Chore => "chore",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose the commit message, stamping generated messages with the local time.
pub fn compose(summary: &ChangeSummary, explicit: Option<&str>) -> String {
    compose_at(summary, explicit, Local::now().naive_local())
}

/// Compose the commit message with an explicit timestamp.
///
/// A non-empty `explicit` message is returned as-is. Otherwise the layout is:
///
/// ```text
/// feat: Update project files
///
/// ✅ Added: 2 files
/// 📝 Modified: 1 files
///
/// Affected: docs, src
///
/// Timestamp: 2024-03-01 09:30:00
/// ```
pub fn compose_at(summary: &ChangeSummary, explicit: Option<&str>, now: NaiveDateTime) -> String {
    if let Some(message) = explicit.filter(|m| !m.is_empty()) {
        return message.to_string();
    }

    if summary.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }

    let commit_type = CommitType::classify(summary);
    let mut msg = format!("{commit_type}: {SUBJECT}\n\n");

    let counters = [
        ("✅ Added", summary.added),
        ("📝 Modified", summary.modified),
        ("🗑️  Deleted", summary.deleted),
        ("📦 Renamed", summary.renamed),
    ];
    for (label, count) in counters {
        if count > 0 {
            let _ = writeln!(msg, "{label}: {count} files");
        }
    }

    if !summary.dirs.is_empty() {
        let dirs: Vec<&str> = summary.dirs.iter().map(String::as_str).collect();
        let _ = writeln!(msg, "\nAffected: {}", dirs.join(", "));
    }

    let _ = write!(msg, "\nTimestamp: {}", now.format(TIMESTAMP_FORMAT));

    msg
}
