//! Cargo manifest manipulation.
//!
//! - **`workspace`**: discovers member manifests from the root `Cargo.toml`
//! - **`package`**: stamps a version into a single member manifest
//!
//! All edits go through `toml_edit` to preserve formatting and comments.

pub mod package;
pub mod workspace;

pub use package::{Manifest, StampOutcome, apply_version};
pub use workspace::{MANIFEST_FILE, list_member_manifests};
