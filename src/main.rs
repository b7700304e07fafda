//! autopush - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use autopush::ship::preflight::open_repository;
use autopush::{ShipConfig, ShipError, run_ship};

/// Stage all changes, commit them, and push.
#[derive(Parser, Debug)]
#[command(name = "autopush")]
#[command(about = "Stage all changes, commit, and push with an optional auto-generated message")]
#[command(version)]
struct Cli {
    /// Commit message (words are joined with spaces)
    message: Vec<String>,

    /// Auto-generate the commit message even if one is given
    #[arg(short, long)]
    auto: bool,

    /// Branch to push
    #[arg(short, long, default_value = "main", env = "AUTOPUSH_BRANCH")]
    branch: String,

    /// Remote to push to
    #[arg(short, long, default_value = "origin", env = "AUTOPUSH_REMOTE")]
    remote: String,

    /// Commit only, do not push
    #[arg(long)]
    no_push: bool,

    /// Path inside the repository to operate on
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: PathBuf,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn ship_config(&self) -> ShipConfig {
        ShipConfig {
            message: self.message.clone(),
            auto: self.auto,
            remote: self.remote.clone(),
            branch: self.branch.clone(),
            push: !self.no_push,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let git = open_repository(&cli.repo)
        .with_context(|| format!("Cannot operate on {}", cli.repo.display()))?;

    match run_ship(&git, &cli.ship_config()) {
        Ok(_) => {
            println!("All done!");
            Ok(())
        }
        Err(ShipError::NoStagedChanges) => {
            println!("No changes to commit!");
            Ok(())
        }
        Err(e) => Err(e).context("Ship failed"),
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
