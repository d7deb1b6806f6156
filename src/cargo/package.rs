//! Package manifest (`Cargo.toml`) version stamping.
//!
//! Handles the `[package]` version and the version of every dependency that
//! belongs to the same package family, recognised by a name prefix:
//!
//! ```toml
//! [package]
//! name = "enalang_vm"
//! version = "0.3.0"          # ← Updated
//!
//! [dependencies]
//! enalang_ir = { path = "../enalang_ir", version = "0.3.0" }   # ← Updated
//! enalang_macro = "0.3.0"                                      # ← Updated
//! serde = "1"                                                  # untouched
//! ```
//!
//! Uses `toml_edit` so comments, key order and array layout survive the
//! rewrite. Replaced values keep their surrounding whitespace and trailing
//! comments, which makes stamping idempotent.

use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, InlineTable, Item, TableLike, Value, value};

const DEPENDENCY_SECTIONS: [&str; 3] = ["dependencies", "dev-dependencies", "build-dependencies"];

/// Outcome of stamping one manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampOutcome {
    /// Number of family dependency entries that received the version.
    pub dependencies: usize,
    /// Whether the serialized manifest differs from what was on disk.
    pub changed: bool,
}

/// Minimal view over a member manifest: package version and dependency tables.
pub struct Manifest {
    path: PathBuf,
    original: String,
    doc: DocumentMut,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// - `ManifestRead`: file cannot be read
    /// - `ManifestParse`: file is not valid TOML
    pub fn load(path: &Path) -> Result<Self> {
        let original = fs::read_to_string(path).map_err(|source| ReleaseError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = original
            .parse::<DocumentMut>()
            .map_err(|source| ReleaseError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            original,
            doc,
        })
    }

    #[cfg(test)]
    fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    fn package_version(&self) -> Option<&str> {
        self.doc
            .get("package")
            .and_then(|pkg| pkg.get("version"))
            .and_then(Item::as_str)
    }

    /// Sets `package.version`, inserting the key if the package has none.
    ///
    /// # Errors
    ///
    /// `InvalidManifest` if there is no `[package]` table.
    pub fn set_package_version(&mut self, version: &str) -> Result<()> {
        let package = self
            .doc
            .get_mut("package")
            .and_then(Item::as_table_like_mut)
            .ok_or_else(|| ReleaseError::InvalidManifest {
                path: self.path.clone(),
                reason: "missing [package] table".to_string(),
            })?;

        set_version_key(package, version);
        Ok(())
    }

    /// Sets the version of every dependency whose name starts with `prefix`.
    ///
    /// Covers `[dependencies]`, `[dev-dependencies]`, `[build-dependencies]`
    /// and their `[target.<cfg>.*]` variants. Entries with `workspace = true`
    /// are skipped. Returns the number of entries stamped.
    pub fn set_family_versions(&mut self, prefix: &str, version: &str) -> usize {
        let mut count = stamp_sections(self.doc.as_table_mut(), prefix, version);

        if let Some(targets) = self.doc.get_mut("target").and_then(Item::as_table_like_mut) {
            for (_, target) in targets.iter_mut() {
                if let Some(target) = target.as_table_like_mut() {
                    count += stamp_sections(target, prefix, version);
                }
            }
        }

        count
    }

    /// Whether the document would serialize differently from the file it came from.
    pub fn is_modified(&self) -> bool {
        self.doc.to_string() != self.original
    }

    /// Writes the document back to its path.
    ///
    /// # Errors
    ///
    /// `ManifestWrite` if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.doc.to_string()).map_err(|source| {
            ReleaseError::ManifestWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// Stamps `version` into the manifest at `path`.
///
/// Sets the package version and every dependency starting with `prefix`.
/// The file is written only when not in dry-run mode and the content actually
/// changed.
///
/// # Errors
///
/// - `ManifestRead` / `ManifestParse`: manifest cannot be loaded
/// - `InvalidManifest`: no `[package]` table
/// - `ManifestWrite`: write-back failed
pub fn apply_version(path: &Path, version: &str, prefix: &str, dry_run: bool) -> Result<StampOutcome> {
    let mut manifest = Manifest::load(path)?;
    manifest.set_package_version(version)?;
    let dependencies = manifest.set_family_versions(prefix, version);
    let changed = manifest.is_modified();

    log::debug!(
        "{}: stamped {} family dependencies (changed: {})",
        path.display(),
        dependencies,
        changed
    );

    if dry_run {
        log::debug!("Dry run, not writing {}", path.display());
    } else if changed {
        manifest.save()?;
    }

    Ok(StampOutcome {
        dependencies,
        changed,
    })
}

fn stamp_sections(root: &mut dyn TableLike, prefix: &str, version: &str) -> usize {
    let mut count = 0;
    for section in DEPENDENCY_SECTIONS {
        if let Some(deps) = root.get_mut(section).and_then(Item::as_table_like_mut) {
            count += stamp_dependencies(deps, prefix, version);
        }
    }
    count
}

fn stamp_dependencies(deps: &mut dyn TableLike, prefix: &str, version: &str) -> usize {
    let mut count = 0;

    for (name, entry) in deps.iter_mut() {
        if !name.get().starts_with(prefix) {
            continue;
        }

        if entry.is_str() {
            replace_str(entry, version);
        } else if let Some(spec) = entry.as_inline_table_mut() {
            if inherits_workspace(spec) {
                log::debug!("Skipping {}: inherited from workspace", name.get());
                continue;
            }
            match spec.get_mut("version") {
                Some(existing) => replace_value(existing, version),
                None => append_inline_version(spec, version),
            }
        } else if let Some(spec) = entry.as_table_like_mut() {
            if inherits_workspace(spec) {
                log::debug!("Skipping {}: inherited from workspace", name.get());
                continue;
            }
            set_version_key(spec, version);
        } else {
            log::warn!("Skipping {}: unsupported dependency format", name.get());
            continue;
        }

        count += 1;
    }

    count
}

fn inherits_workspace(spec: &dyn TableLike) -> bool {
    spec.get("workspace")
        .and_then(Item::as_bool)
        .unwrap_or(false)
}

fn set_version_key(table: &mut dyn TableLike, version: &str) {
    match table.get_mut("version") {
        Some(item) => replace_str(item, version),
        None => {
            table.insert("version", value(version));
        }
    }
}

/// Appends `version` as the last key of an inline table.
///
/// The padding before the closing brace moves from the previous last value
/// to the new one, so `{ path = "../x" }` becomes
/// `{ path = "../x", version = "1.0.0" }`.
fn append_inline_version(table: &mut InlineTable, version: &str) {
    let mut new_value = Value::from(version);

    if let Some((_, last)) = table.iter_mut().last() {
        let closing = last.decor().suffix().cloned();
        last.decor_mut().set_suffix("");
        if let Some(closing) = closing {
            new_value.decor_mut().set_suffix(closing);
        }
    }

    table.insert("version", new_value);
}

/// Replaces a value in place, keeping its whitespace and trailing comment.
fn replace_str(item: &mut Item, version: &str) {
    match item.as_value_mut() {
        Some(existing) => replace_value(existing, version),
        None => *item = value(version),
    }
}

fn replace_value(existing: &mut Value, version: &str) {
    let decor = existing.decor().clone();
    *existing = Value::from(version);
    *existing.decor_mut() = decor;
}
