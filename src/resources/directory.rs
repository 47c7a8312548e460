//! Directory resource.
use std::path::PathBuf;

use super::{Resource, ResourceState};
use crate::error::InstallError;

/// A directory that must exist.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    /// Directory path.
    pub path: PathBuf,
}

impl DirectoryResource {
    /// Create a new directory resource.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Resource for DirectoryResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState, InstallError> {
        if self.path.is_dir() {
            return Ok(ResourceState::Present);
        }
        if super::entry_exists(&self.path)? {
            return Ok(ResourceState::Invalid {
                reason: "path exists and is not a directory".to_string(),
            });
        }
        Ok(ResourceState::Missing)
    }

    fn apply(&self) -> Result<(), InstallError> {
        std::fs::create_dir_all(&self.path)
            .map_err(InstallError::fs("create directory", &self.path))
    }
}
