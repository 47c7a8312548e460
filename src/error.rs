//! Domain-specific error types for the installer.
//!
//! Internal modules return typed errors ([`InstallError`], [`ManifestError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! InstallError
//! ├── Packaging: bundled .claude/ directory missing
//! ├── Filesystem: mkdir / copy / remove failures
//! ├── SameFile: destination resolves to the bundled file
//! ├── Prompt: stdin unreadable in interactive mode
//! └── Manifest(ManifestError): embedded manifest is invalid
//! ```
//!
//! A manifest entry whose source file is absent is *not* an error: it is the
//! [`InstallOutcome::SourceMissing`](crate::commands::InstallOutcome) outcome.
//! An operator declining the interactive prompt is not an error either.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for an install run.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The bundled source directory does not exist (corrupt or incomplete package).
    #[error(".claude/ directory not found in package: {}", path.display())]
    Packaging {
        /// Location the bundled directory was expected at.
        path: PathBuf,
    },

    /// A filesystem operation failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Filesystem {
        /// Short verb phrase describing the operation (e.g. `"copy to"`).
        action: &'static str,
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The destination resolves to the bundled source file itself.
    #[error("refusing to copy onto the bundled file itself: {}", dest.display())]
    SameFile {
        /// Destination that resolved to the source.
        dest: PathBuf,
    },

    /// Operator input could not be read.
    #[error("failed to read confirmation from stdin: {0}")]
    Prompt(#[source] io::Error),

    /// The embedded manifest is invalid.
    #[error("invalid manifest: {0}")]
    Manifest(#[from] ManifestError),
}

impl InstallError {
    /// Build a closure that wraps an [`io::Error`] into [`InstallError::Filesystem`].
    ///
    /// Intended for `map_err`:
    ///
    /// ```ignore
    /// std::fs::create_dir_all(&dir).map_err(InstallError::fs("create directory", &dir))?;
    /// ```
    pub fn fs(action: &'static str, path: &std::path::Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Filesystem {
            action,
            path,
            source,
        }
    }
}

/// Errors that arise from loading and validating the manifest table.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The TOML table could not be deserialized.
    #[error("{0}")]
    Parse(#[from] toml::de::Error),

    /// An entry path is empty.
    #[error("entry has an empty {field} path")]
    EmptyPath {
        /// Which side of the entry (`"source"` or `"dest"`).
        field: &'static str,
    },

    /// An entry path is absolute or carries a root/prefix component.
    #[error("{field} path must be relative: {path}")]
    AbsolutePath {
        /// Which side of the entry (`"source"` or `"dest"`).
        field: &'static str,
        /// The offending path.
        path: String,
    },

    /// An entry path escapes its root via `..`.
    #[error("{field} path must not contain '..': {path}")]
    ParentTraversal {
        /// Which side of the entry (`"source"` or `"dest"`).
        field: &'static str,
        /// The offending path.
        path: String,
    },

    /// Two entries install to the same destination.
    #[error("duplicate destination: {0}")]
    DuplicateDest(String),
}
