//! Error types for ena-release.
//!
//! All operations return `Result<T>` which aliases `Result<T, ReleaseError>`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from release operations.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// `version.txt` or `publish-order.txt` could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Version file contains nothing but whitespace.
    #[error("Version file is empty: {}", path.display())]
    EmptyVersion { path: PathBuf },

    /// Workspace root manifest is missing or does not declare members.
    #[error("Invalid workspace manifest {}: {reason}", path.display())]
    RootManifest { path: PathBuf, reason: String },

    /// Member manifest could not be read.
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Member manifest is not valid TOML.
    #[error("Failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    /// Member manifest parsed but has the wrong shape.
    #[error("Invalid manifest {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    /// Rewritten manifest could not be written back.
    #[error("Failed to write manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External command ran but did not succeed.
    #[error("`{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

/// Result type alias for ena-release operations.
pub type Result<T> = std::result::Result<T, ReleaseError>;
