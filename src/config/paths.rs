//! Resolution of the target base and bundled source directories.
use anyhow::{Context as _, Result};
use std::path::{Component, Path, PathBuf};

/// Name of the subdirectory installed into the target base, and of the
/// bundled directory shipped with the package.
pub const CLAUDE_DIR: &str = ".claude";

/// Resolve the target base directory.
///
/// An explicit `--path` wins and is made absolute against the current
/// directory; otherwise the current directory is used.  Existence is not
/// checked: directories are created later by the install step.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn resolve_target_base(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => {
            let abs = std::path::absolute(p)
                .with_context(|| format!("resolving target path {}", p.display()))?;
            Ok(dunce::simplified(&normalize(&abs)).to_path_buf())
        }
        None => std::env::current_dir().context("reading current directory"),
    }
}

/// Drop `.` components and fold `..` into its parent without touching the
/// filesystem.  `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Candidate locations of the bundled directory for an executable living in
/// `exe_dir`, in priority order.
///
/// - `<exe_dir>/../.claude` for an installed `bin/` layout
/// - `<exe_dir>/../../.claude` for a cargo `target/<profile>/` layout
#[must_use]
pub fn source_root_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    vec![
        exe_dir.join("..").join(CLAUDE_DIR),
        exe_dir.join("../..").join(CLAUDE_DIR),
    ]
}

/// Resolve the bundled `.claude/` directory.
///
/// An explicit `--source` wins.  Otherwise the first existing candidate next
/// to the running executable is used; when none exists the first candidate is
/// returned so the packaging check can name a concrete path.
///
/// # Errors
///
/// Returns an error if the location of the running executable is unknown.
pub fn resolve_source_root(source: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = source {
        return resolve_target_base(Some(dir));
    }

    let exe = std::env::current_exe().context("locating the running executable")?;
    let exe_dir = exe
        .parent()
        .with_context(|| format!("executable has no parent directory: {}", exe.display()))?;
    let chosen = pick_source_root(&source_root_candidates(exe_dir))
        .context("no bundled directory candidates")?;
    Ok(dunce::canonicalize(&chosen).unwrap_or(chosen))
}

/// First candidate that is an existing directory, else the first candidate.
fn pick_source_root(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|c| c.is_dir())
        .or_else(|| candidates.first())
        .cloned()
}
