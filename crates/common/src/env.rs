//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::{Path, PathBuf};

use tracing::info;

/// Local file backing a SQLite URL, if the URL points at one.
///
/// `sqlite::memory:` and non-SQLite URLs yield `None`.
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") || path == "memory" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of a file-backed SQLite database exists.
pub async fn ensure_data_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else { return Ok(()) };
    let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) else { return Ok(()) };
    if tokio::fs::metadata(dir).await.is_err() {
        info!(data_dir = %dir.display(), "creating sqlite data directory");
    }
    create_dir(dir).await
}

async fn create_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))
}
