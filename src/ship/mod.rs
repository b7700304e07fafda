//! Ship pipeline: stage everything, commit, and push.
//!
//! Runs sequentially: reset the index, stage all changes, summarize what is
//! staged, compose the message, commit, then push unless disabled.

pub mod preflight;

use tracing::{debug, warn};

use crate::commit::{ChangeSummary, collect, compose};
use crate::error::ShipError;
use crate::git::GitBackend;

/// Number of `git status --short` lines shown before committing.
const STATUS_PREVIEW_LINES: usize = 30;

const RULE_WIDTH: usize = 50;

/// Configuration for a ship run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct ShipConfig {
    /// Words of a literal commit message.
    pub message: Vec<String>,
    /// Generate the message even when words were given.
    pub auto: bool,
    pub remote: String,
    pub branch: String,
    pub push: bool,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            message: Vec::new(),
            auto: false,
            remote: "origin".to_string(),
            branch: "main".to_string(),
            push: true,
        }
    }
}

impl ShipConfig {
    /// The literal message to use, or `None` when it should be generated.
    pub fn explicit_message(&self) -> Option<String> {
        if self.auto || self.message.is_empty() {
            None
        } else {
            Some(self.message.join(" "))
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ShipOutcome {
    pub commit: String,
    pub message: String,
    pub summary: ChangeSummary,
    pub pushed: bool,
}

/// Run the full ship pipeline against `git`.
///
/// Returns [`ShipError::NoStagedChanges`] when staging leaves nothing to
/// commit. A failed push leaves the new commit in place.
pub fn run_ship<G>(git: &G, config: &ShipConfig) -> Result<ShipOutcome, ShipError>
where
    G: GitBackend + ?Sized,
{
    print_rule();
    println!("AUTO COMMIT & PUSH");
    print_rule();
    println!();

    // ── Stage 1: Stage everything ──
    if let Err(e) = git.reset_index() {
        warn!("Failed to reset index, staging on top of it: {e}");
    }

    println!("Staging all changes...");
    git.stage_all()?;

    let entries = git.staged_changes()?;
    if entries.is_empty() {
        return Err(ShipError::NoStagedChanges);
    }

    let summary = collect(entries);
    debug!(
        "Staged: {} added, {} modified, {} deleted, {} renamed, {} total",
        summary.added, summary.modified, summary.deleted, summary.renamed, summary.total
    );

    // ── Stage 2: Show what will be committed ──
    println!();
    println!("Changes to commit:");
    match git.short_status() {
        Ok(lines) => {
            for line in lines.iter().take(STATUS_PREVIEW_LINES) {
                println!("  {line}");
            }
            if lines.len() > STATUS_PREVIEW_LINES {
                println!("  ... and {} more", lines.len() - STATUS_PREVIEW_LINES);
            }
        }
        Err(e) => warn!("Could not read short status: {e}"),
    }
    println!();
    println!("Total files changed: {}", summary.total);
    println!();

    // ── Stage 3: Commit message ──
    let explicit = config.explicit_message();
    let message = compose(&summary, explicit.as_deref());
    if explicit.is_some() {
        println!("Using provided commit message:");
    } else {
        println!("Auto-generated commit message:");
    }
    println!("{message}");
    println!();

    // ── Stage 4: Commit ──
    println!("Committing changes...");
    git.commit(&message).map_err(ShipError::CommitFailed)?;
    let commit = git.head_short_hash()?;

    println!();
    println!("  [DONE] Commit successful");
    println!("  Commit hash: {commit}");
    println!();

    // ── Stage 5: Push ──
    if config.push {
        println!("Pushing to {}/{}...", config.remote, config.branch);
        git.push(&config.remote, &config.branch)
            .map_err(|source| ShipError::PushFailed {
                remote: config.remote.clone(),
                branch: config.branch.clone(),
                source,
            })?;

        println!();
        print_rule();
        println!("  [DONE] Pushed to {}/{}", config.remote, config.branch);
        print_rule();
    } else {
        println!();
        print_rule();
        println!("  [DONE] Committed (not pushed)");
        print_rule();
    }

    println!();
    println!("Summary:");
    println!("  Files changed: {}", summary.total);
    println!("  Branch: {}", config.branch);
    println!("  Commit: {commit}");
    println!();

    Ok(ShipOutcome {
        commit,
        message,
        summary,
        pushed: config.push,
    })
}

fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}
