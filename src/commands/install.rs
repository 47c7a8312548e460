//! Per-file install: copy each manifest entry independently, skipping files
//! that already exist unless `--force` is given.
use anyhow::Result;
use std::path::Path;

use super::{InstallOutcome, RunSummary, check_source_root, print_next_steps};
use crate::config::{InstallConfig, Manifest};
use crate::error::InstallError;
use crate::logging::Log;
use crate::resources::directory::DirectoryResource;
use crate::resources::template::TemplateFileResource;
use crate::resources::{Resource, ResourceState};

/// Run the per-file install.
///
/// # Errors
///
/// Returns an error if the bundled directory is missing (before anything is
/// written) or if creating a directory or copying a file fails.  Files copied
/// before the failure are kept.
pub fn run(config: &InstallConfig, log: &dyn Log) -> Result<RunSummary> {
    check_source_root(config)?;

    let version = option_env!("LIMPID_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.stage(&format!(
        "Installing LimpidAI to {}",
        config.target_base.display()
    ));
    log.debug(&format!("limpid-ai {version}"));
    log.debug(&format!("bundled files: {}", config.source_root.display()));

    let target_dir = config.target_dir();
    let created = ensure_directories(&target_dir, &config.manifest, config.dry_run, log)?;
    log.debug(&format!("{created} director(ies) created"));

    let force = config.force();
    let mut summary = RunSummary::default();
    for entry in config.manifest.entries() {
        let resource =
            TemplateFileResource::new(config.source_path(entry), config.dest_path(entry));
        let outcome = install_entry(&resource, force, config.dry_run)?;
        report(log, outcome, &entry.source, &entry.dest, config.dry_run);
        summary.record(outcome);
    }

    print_summary(log, &summary, config);
    Ok(summary)
}

/// Create every directory the manifest's destinations need under
/// `target_dir`, returning how many were missing.
///
/// Existing directories are left untouched, so calling this twice is the same
/// as calling it once.  In dry-run mode nothing is created.
///
/// # Errors
///
/// Returns an error if a directory cannot be inspected or created.
pub fn ensure_directories(
    target_dir: &Path,
    manifest: &Manifest,
    dry_run: bool,
    log: &dyn Log,
) -> Result<usize, InstallError> {
    let mut created = 0;
    for rel in manifest.dest_dirs() {
        let resource = DirectoryResource::new(target_dir.join(rel));
        match resource.current_state()? {
            ResourceState::Present => {
                log.debug(&format!("directory exists: {}", resource.description()));
            }
            ResourceState::Missing if dry_run => {
                log.dry_run(&format!("would create {}", resource.description()));
                created += 1;
            }
            // An existing non-directory fails here with the OS error.
            ResourceState::Missing | ResourceState::Invalid { .. } => {
                resource.apply()?;
                log.debug(&format!("created {}", resource.description()));
                created += 1;
            }
        }
    }
    Ok(created)
}

/// Apply the per-file policy to one template.
///
/// 1. Source absent: [`InstallOutcome::SourceMissing`], destination untouched.
/// 2. Destination exists and `!force`: [`InstallOutcome::Skipped`].
/// 3. Otherwise the source bytes replace the destination:
///    [`InstallOutcome::Installed`] or [`InstallOutcome::Updated`].
///
/// With `dry_run` the same outcome is returned but nothing is copied.
///
/// # Errors
///
/// Returns an error if the destination cannot be inspected or the copy fails.
pub fn install_entry(
    resource: &TemplateFileResource,
    force: bool,
    dry_run: bool,
) -> Result<InstallOutcome, InstallError> {
    let outcome = match resource.current_state()? {
        ResourceState::Invalid { .. } => return Ok(InstallOutcome::SourceMissing),
        ResourceState::Present if !force => return Ok(InstallOutcome::Skipped),
        ResourceState::Present => InstallOutcome::Updated,
        ResourceState::Missing => InstallOutcome::Installed,
    };
    if !dry_run {
        resource.apply()?;
    }
    Ok(outcome)
}

/// Log one progress line for a manifest entry.
fn report(log: &dyn Log, outcome: InstallOutcome, source: &Path, dest: &Path, dry_run: bool) {
    let dest = dest.display();
    match outcome {
        InstallOutcome::SourceMissing => {
            log.warn(&format!("source file not found: {}", source.display()));
        }
        InstallOutcome::Skipped => log.info(&format!("skipped (already exists): {dest}")),
        InstallOutcome::Installed | InstallOutcome::Updated if dry_run => {
            let verb = if outcome == InstallOutcome::Installed {
                "install"
            } else {
                "update"
            };
            log.dry_run(&format!("would {verb}: {dest}"));
        }
        InstallOutcome::Installed | InstallOutcome::Updated => {
            log.info(&format!("{outcome}: {dest}"));
        }
    }
}

fn print_summary(log: &dyn Log, summary: &RunSummary, config: &InstallConfig) {
    log.stage("Summary");
    log.debug(&format!(
        "{} of {} manifest entries processed",
        summary.total(),
        config.manifest.len()
    ));
    if config.dry_run {
        log.info(&format!("Dry run complete, nothing written ({summary})"));
    } else {
        log.info(&format!("Installation complete ({summary})"));
    }
    if summary.missing > 0 {
        log.warn(&format!(
            "{} bundled file(s) missing; the package may be incomplete",
            summary.missing
        ));
    }

    print_next_steps(log);

    if summary.skipped > 0 && !config.force() {
        log.info("Tip: use --force to overwrite existing files");
    }
}
