//! Template file resource: a bundled file copied verbatim into the target.
use std::path::PathBuf;

use super::{Resource, ResourceState};
use crate::error::InstallError;

/// A bundled template file and the place it is installed to.
#[derive(Debug, Clone)]
pub struct TemplateFileResource {
    /// Master copy inside the bundled directory.
    pub source: PathBuf,
    /// Installed copy inside the target's `.claude/` directory.
    pub dest: PathBuf,
}

impl TemplateFileResource {
    /// Create a new template file resource.
    #[must_use]
    pub const fn new(source: PathBuf, dest: PathBuf) -> Self {
        Self { source, dest }
    }

    /// Whether the destination exists and resolves to the same file as the source.
    fn is_self_copy(&self) -> Result<bool, InstallError> {
        if !super::entry_exists(&self.dest)? {
            return Ok(false);
        }
        let Ok(dest) = dunce::canonicalize(&self.dest) else {
            return Ok(false);
        };
        let source =
            dunce::canonicalize(&self.source).map_err(InstallError::fs("resolve", &self.source))?;
        Ok(source == dest)
    }
}

impl Resource for TemplateFileResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.source.display(), self.dest.display())
    }

    fn current_state(&self) -> Result<ResourceState, InstallError> {
        if !self.source.is_file() {
            return Ok(ResourceState::Invalid {
                reason: format!("source file not found: {}", self.source.display()),
            });
        }
        if super::entry_exists(&self.dest)? {
            Ok(ResourceState::Present)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    /// Copy the source bytes over the destination, replacing it entirely.
    ///
    /// Refuses to copy when the destination resolves to the source itself
    /// (for example through a symlinked parent directory), since the copy
    /// would truncate the bundled file.
    fn apply(&self) -> Result<(), InstallError> {
        if self.is_self_copy()? {
            return Err(InstallError::SameFile {
                dest: self.dest.clone(),
            });
        }
        std::fs::copy(&self.source, &self.dest)
            .map(drop)
            .map_err(InstallError::fs("copy to", &self.dest))
    }
}
