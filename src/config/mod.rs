//! Run configuration: resolved paths, flags, and the embedded manifest.
pub mod manifest;
pub mod paths;

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::Cli;
pub use manifest::{Manifest, ManifestEntry};
pub use paths::CLAUDE_DIR;

/// How existing installations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Install each manifest file independently; existing files are skipped
    /// unless `force` is set.
    PerFile {
        /// Overwrite destination files that already exist.
        force: bool,
    },
    /// Ask for confirmation, then replace the whole `.claude/` subtree with
    /// the bundled directory.
    ReplaceTree,
}

/// Immutable settings for a single run, read once from the command line.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Project directory; files land under `<target_base>/.claude/`.
    pub target_base: PathBuf,
    /// Bundled `.claude/` directory holding the master copies.
    pub source_root: PathBuf,
    /// Overwrite policy.
    pub mode: InstallMode,
    /// Preview changes without writing.
    pub dry_run: bool,
    /// Files to install in per-file mode.
    pub manifest: Manifest,
}

impl InstallConfig {
    /// Resolve paths and load the embedded manifest from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be resolved or the embedded
    /// manifest is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mode = if cli.interactive {
            InstallMode::ReplaceTree
        } else {
            InstallMode::PerFile { force: cli.force }
        };
        Ok(Self {
            target_base: paths::resolve_target_base(cli.path.as_deref())?,
            source_root: paths::resolve_source_root(cli.source.as_deref())?,
            mode,
            dry_run: cli.dry_run,
            manifest: Manifest::embedded()?,
        })
    }

    /// The `.claude/` directory inside the target base.
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        self.target_base.join(CLAUDE_DIR)
    }

    /// Whether existing files are overwritten in per-file mode.
    #[must_use]
    pub const fn force(&self) -> bool {
        matches!(self.mode, InstallMode::PerFile { force: true })
    }

    /// Absolute source path of a manifest entry.
    #[must_use]
    pub fn source_path(&self, entry: &ManifestEntry) -> PathBuf {
        self.source_root.join(&entry.source)
    }

    /// Absolute destination path of a manifest entry.
    #[must_use]
    pub fn dest_path(&self, entry: &ManifestEntry) -> PathBuf {
        self.target_dir().join(&entry.dest)
    }

    /// Whether the bundled directory is present.
    #[must_use]
    pub fn source_root_exists(&self) -> bool {
        self.source_root.is_dir()
    }
}
