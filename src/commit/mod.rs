//! Change summaries and generated commit messages.

pub mod message;
pub mod summary;

pub use message::{CommitType, FALLBACK_MESSAGE, compose, compose_at};
pub use summary::{ChangeSummary, PathChange, StatusKind, collect};
