//! Workspace-level `Cargo.toml` discovery.
//!
//! Reads `[workspace] members` from the root manifest and turns every entry
//! into the path of that member's own `Cargo.toml`.

use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};

pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Lists member manifests in the order `workspace.members` declares them.
///
/// ```toml
/// [workspace]
/// members = ["enalang_ir", "enalang_vm"]
/// ```
///
/// yields `<workspace>/enalang_ir/Cargo.toml`, `<workspace>/enalang_vm/Cargo.toml`.
///
/// Members are used literally; glob patterns are not expanded.
///
/// # Errors
///
/// `RootManifest` if the root manifest is missing, is not valid TOML, has no
/// `workspace.members` array, or lists a member that is not a string.
pub fn list_member_manifests(workspace: &Path) -> Result<Vec<PathBuf>> {
    let root = workspace.join(MANIFEST_FILE);
    let invalid = |reason: String| ReleaseError::RootManifest {
        path: root.clone(),
        reason,
    };

    let content = fs::read_to_string(&root).map_err(|e| invalid(e.to_string()))?;
    let doc = content
        .parse::<DocumentMut>()
        .map_err(|e| invalid(e.to_string()))?;

    let members = doc
        .get("workspace")
        .and_then(|ws| ws.get("members"))
        .and_then(Item::as_array)
        .ok_or_else(|| invalid("missing `workspace.members` array".to_string()))?;

    let mut manifests = Vec::with_capacity(members.len());
    for member in members.iter() {
        let member = member.as_str().ok_or_else(|| {
            invalid(format!("member {} is not a string", member.to_string().trim()))
        })?;
        manifests.push(workspace.join(member).join(MANIFEST_FILE));
    }

    log::debug!(
        "Found {} workspace members in {}",
        manifests.len(),
        root.display()
    );
    Ok(manifests)
}
