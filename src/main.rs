mod db;
mod error;
mod models;
mod run;
mod stats;
mod util;

#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "mesoledger=warn";

fn main() -> Result<()> {
    init_logging();

    let cli = run::Cli::parse();
    let db_path = match cli.db {
        Some(path) => path,
        None => get_db_path()?,
    };
    let mut db = db::Database::open(&db_path)
        .with_context(|| format!("Failed to open ledger: {}", db_path.display()))?;
    run::as_cli(cli.command, &mut db)
}

/// Diagnostics go to stderr so command output on stdout stays parseable.
/// `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "mesoledger", "mesoledger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("mesoledger.db"))
}
