//! The fixed table of template files this tool distributes.
use std::collections::{BTreeSet, HashSet};
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::ManifestError;

/// Manifest compiled into the binary.
const EMBEDDED: &str = include_str!("manifest.toml");

/// A single `(source, dest)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Path relative to the bundled `.claude/` directory.
    pub source: PathBuf,
    /// Path relative to the target's `.claude/` directory.
    pub dest: PathBuf,
}

impl ManifestEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    file: Vec<ManifestEntry>,
}

/// Ordered list of files to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Load the manifest that ships with this binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded table fails to parse or validate.
    pub fn embedded() -> Result<Self, ManifestError> {
        Self::from_toml(EMBEDDED)
    }

    /// Parse a manifest from a TOML string of `[[file]]` tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or any entry is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = toml::from_str(content)?;
        Self::new(raw.file)
    }

    /// Build a manifest from entries, validating each one.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is empty, absolute, escapes its root, or if
    /// two entries share a destination.
    pub fn new(entries: Vec<ManifestEntry>) -> Result<Self, ManifestError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            validate_relative("source", &entry.source)?;
            validate_relative("dest", &entry.dest)?;
            if !seen.insert(entry.dest.clone()) {
                return Err(ManifestError::DuplicateDest(
                    entry.dest.display().to_string(),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// Entries in declared order.
    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directories implied by the destinations, relative to the target's
    /// `.claude/` directory, deduplicated and sorted.
    ///
    /// Entries placed directly in `.claude/` contribute an empty path.
    #[must_use]
    pub fn dest_dirs(&self) -> BTreeSet<PathBuf> {
        self.entries
            .iter()
            .map(|e| {
                e.dest
                    .parent()
                    .map_or_else(PathBuf::new, Path::to_path_buf)
            })
            .collect()
    }
}

fn validate_relative(field: &'static str, path: &Path) -> Result<(), ManifestError> {
    if path.as_os_str().is_empty() {
        return Err(ManifestError::EmptyPath { field });
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(ManifestError::ParentTraversal {
                    field,
                    path: path.display().to_string(),
                });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ManifestError::AbsolutePath {
                    field,
                    path: path.display().to_string(),
                });
            }
        }
    }
    Ok(())
}
