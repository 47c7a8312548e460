//! File-system helpers for the whole-tree replace mode.
use std::path::Path;

use crate::error::InstallError;

/// Recursively copy a directory tree, returning the number of files copied.
///
/// Symlinks within the source tree are *followed*: [`Path::is_dir`] follows
/// symlinks, so directory symlinks are recursed into and their contents
/// materialised rather than copying the link itself.
///
/// # Errors
///
/// Returns an error if the destination directory cannot be created, a source
/// entry cannot be read, or a file cannot be copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, InstallError> {
    std::fs::create_dir_all(dst).map_err(InstallError::fs("create directory", dst))?;
    let mut copied = 0;
    for entry in std::fs::read_dir(src).map_err(InstallError::fs("read directory", src))? {
        let entry = entry.map_err(InstallError::fs("read entry in", src))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).map_err(InstallError::fs("copy to", &dst_path))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Count the regular files below `dir`, following directory symlinks the
/// same way [`copy_dir_recursive`] does.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn count_files(dir: &Path) -> Result<usize, InstallError> {
    let mut count = 0;
    for entry in std::fs::read_dir(dir).map_err(InstallError::fs("read directory", dir))? {
        let path = entry.map_err(InstallError::fs("read entry in", dir))?.path();
        if path.is_dir() {
            count += count_files(&path)?;
        } else {
            count += 1;
        }
    }
    Ok(count)
}

/// Remove a directory tree if it exists.  Does nothing if `path` is absent.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<(), InstallError> {
    if crate::resources::entry_exists(path)? {
        std::fs::remove_dir_all(path).map_err(InstallError::fs("remove", path))?;
    }
    Ok(())
}
