//! Idempotent resource primitives (check + apply pattern).
pub mod directory;
pub mod helpers;
pub mod template;

use std::io;
use std::path::Path;

use crate::error::InstallError;

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use limpid_cli::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let invalid = ResourceState::Invalid { reason: "source file not found".into() };
///
/// assert_ne!(missing, ResourceState::Present);
/// assert_ne!(missing, invalid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Nothing exists at the destination.
    Missing,
    /// Something already exists at the destination.
    Present,
    /// The resource cannot be applied.
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Interface for resources that can be checked and applied.
pub trait Resource {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined (e.g. permission
    /// denied while inspecting the destination).
    fn current_state(&self) -> Result<ResourceState, InstallError>;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error on any I/O failure.
    fn apply(&self) -> Result<(), InstallError>;
}

/// Report whether anything (file, directory, or symlink, broken or not) exists
/// at `path` without following symlinks.
///
/// # Errors
///
/// Returns an error if the path cannot be inspected for a reason other than
/// not existing.
pub fn entry_exists(path: &Path) -> Result<bool, InstallError> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(InstallError::fs("inspect", path)(e)),
    }
}
