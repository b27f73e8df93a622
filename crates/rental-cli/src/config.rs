//! Data directory resolution

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Database file inside the data directory
pub const DB_FILE: &str = "rental.db";

const DATA_DIR_NAME: &str = ".rental";

/// Resolve the data directory and make sure it exists
///
/// An explicit directory (from `--data-dir` or `RENTAL_DATA_DIR`) wins over
/// `~/.rental`.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir,
        None => home_dir()?.join(DATA_DIR_NAME),
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Ok(dir)
}

/// Path of the database file in `data_dir`
pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE)
}

fn home_dir() -> Result<PathBuf> {
    // Try HOME first (Unix), then USERPROFILE (Windows)
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::home_dir)
        .context("HOME or USERPROFILE environment variable not set")
}
