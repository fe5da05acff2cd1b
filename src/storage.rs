use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a corpus snapshot is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotLocation {
    Url(String),
    File(PathBuf),
}

impl SnapshotLocation {
    /// `http://` and `https://` locations are fetched, anything else is a
    /// path relative to `base_dir`.
    pub fn parse(location: &str, base_dir: &Path) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            SnapshotLocation::Url(location.to_string())
        } else {
            SnapshotLocation::File(base_dir.join(location))
        }
    }
}

impl std::fmt::Display for SnapshotLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotLocation::Url(url) => write!(f, "{url}"),
            SnapshotLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads a snapshot file fully into memory.
pub fn read_snapshot_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "Snapshot file {} does not exist",
            path.display()
        ));
    }
    fs::read(path).with_context(|| format!("Failed to read snapshot file {}", path.display()))
}
