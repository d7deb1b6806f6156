//! Run configuration and the two release data files.
//!
//! `version.txt` holds the version stamped everywhere; `publish-order.txt`
//! lists package names, one per line, in the order they must be published.

use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PREFIX: &str = "enalang";
pub const VERSION_FILE: &str = "version.txt";
pub const PUBLISH_ORDER_FILE: &str = "publish-order.txt";

/// Immutable settings for one run, built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub dry_run: bool,
    pub set_version: bool,
    pub tag: bool,
    pub publish: bool,
    pub keep_going: bool,
    pub prefix: String,
    pub workspace: PathBuf,
}

impl Config {
    /// Returns true if at least one of `set_version`, `tag`, `publish` is set.
    pub fn has_action(&self) -> bool {
        self.set_version || self.tag || self.publish
    }
}

/// Reads the release version, trimmed of surrounding whitespace.
pub fn load_version(workspace: &Path) -> Result<String> {
    let path = workspace.join(VERSION_FILE);
    let raw = read(&path)?;
    let version = raw.trim();

    if version.is_empty() {
        return Err(ReleaseError::EmptyVersion { path });
    }

    log::debug!("Loaded version {} from {}", version, path.display());
    Ok(version.to_string())
}

/// Reads the publish order. Blank lines and `#` comments are skipped.
pub fn load_publish_order(workspace: &Path) -> Result<Vec<String>> {
    let path = workspace.join(PUBLISH_ORDER_FILE);
    let order: Vec<String> = read(&path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();

    log::debug!("Loaded {} packages from {}", order.len(), path.display());
    Ok(order)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ReleaseError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}
