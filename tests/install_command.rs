#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the per-file install.
//!
//! These tests drive [`commands::install::run`] end to end against temporary
//! bundles and targets, covering first installs, repeated runs, forced
//! updates over local edits, and packaging defects.

mod common;

use std::path::Path;

use common::TestContextBuilder;
use limpid_cli::commands::{self, InstallOutcome, RunSummary};
use limpid_cli::config::Manifest;
use limpid_cli::error::InstallError;
use limpid_cli::logging::Logger;
use limpid_cli::resources::template::TemplateFileResource;

fn single_file() -> common::IntegrationTestContext {
    TestContextBuilder::new()
        .with_file("a.md", "x/a.md", "# a\nbundled body\n")
        .build()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn first_run_installs_into_empty_target() {
    let ctx = single_file();

    let summary = commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            installed: 1,
            updated: 0,
            skipped: 0,
            missing: 0,
        }
    );
    assert_eq!(ctx.read_installed("x/a.md"), "# a\nbundled body\n");
}

#[test]
fn second_run_without_force_skips_and_keeps_content() {
    let ctx = single_file();
    let config = ctx.config(false, false);
    commands::install::run(&config, &Logger::new()).unwrap();
    let before = std::fs::read(ctx.installed("x/a.md")).unwrap();

    let summary = commands::install::run(&config, &Logger::new()).unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.installed, 0);
    assert_eq!(std::fs::read(ctx.installed("x/a.md")).unwrap(), before);
}

#[test]
fn forced_run_replaces_local_edits() {
    let ctx = single_file();
    commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap();
    ctx.edit_installed("x/a.md", "hand-edited");

    let summary = commands::install::run(&ctx.config(true, false), &Logger::new()).unwrap();

    assert_eq!(summary.updated, 1);
    assert_eq!(ctx.read_installed("x/a.md"), "# a\nbundled body\n");
}

#[test]
fn unforced_run_preserves_local_edits() {
    let ctx = single_file();
    commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap();
    ctx.edit_installed("x/a.md", "hand-edited");

    commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap();

    assert_eq!(ctx.read_installed("x/a.md"), "hand-edited");
}

#[test]
fn missing_source_is_reported_and_not_created() {
    let ctx = TestContextBuilder::new()
        .with_file("a.md", "x/a.md", "a")
        .with_missing_file("gone.md", "y/gone.md")
        .build();

    let summary = commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap();

    assert_eq!(summary.installed, 1);
    assert_eq!(summary.missing, 1);
    assert!(!ctx.installed("y/gone.md").exists());
}

#[test]
fn missing_bundle_fails_without_writing() {
    let ctx = TestContextBuilder::new()
        .with_missing_file("a.md", "x/a.md")
        .without_bundle()
        .build();

    let err = commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InstallError>(),
        Some(InstallError::Packaging { .. })
    ));
    assert!(!ctx.target_base().exists());
}

#[cfg(unix)]
#[test]
fn forced_run_never_truncates_bundle_reached_through_symlink() {
    let ctx = TestContextBuilder::new()
        .with_file("agents/curator.md", "agents/curator.md", "MASTER CONTENT\n")
        .build();
    std::fs::create_dir_all(ctx.installed("")).unwrap();
    std::os::unix::fs::symlink(ctx.source_root().join("agents"), ctx.installed("agents"))
        .unwrap();

    let err = commands::install::run(&ctx.config(true, false), &Logger::new()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InstallError>(),
        Some(InstallError::SameFile { .. })
    ));
    assert_eq!(
        std::fs::read_to_string(ctx.source_root().join("agents/curator.md")).unwrap(),
        "MASTER CONTENT\n"
    );
}

#[cfg(unix)]
#[test]
fn unforced_run_skips_bundle_reached_through_symlink() {
    let ctx = TestContextBuilder::new()
        .with_file("agents/curator.md", "agents/curator.md", "MASTER CONTENT\n")
        .build();
    std::fs::create_dir_all(ctx.installed("")).unwrap();
    std::os::unix::fs::symlink(ctx.source_root().join("agents"), ctx.installed("agents"))
        .unwrap();

    let summary = commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(
        std::fs::read_to_string(ctx.source_root().join("agents/curator.md")).unwrap(),
        "MASTER CONTENT\n"
    );
}

#[test]
fn files_outside_the_manifest_are_untouched() {
    let ctx = single_file();
    std::fs::create_dir_all(ctx.installed("x")).unwrap();
    std::fs::write(ctx.installed("x/notes.md"), "mine").unwrap();
    std::fs::write(ctx.installed("settings.json"), "{}").unwrap();

    commands::install::run(&ctx.config(true, false), &Logger::new()).unwrap();

    assert_eq!(ctx.read_installed("x/notes.md"), "mine");
    assert_eq!(ctx.read_installed("settings.json"), "{}");
}

#[test]
fn dry_run_creates_nothing() {
    let ctx = single_file();

    let summary = commands::install::run(&ctx.config(false, true), &Logger::new()).unwrap();

    assert_eq!(summary.installed, 1);
    assert!(!ctx.target_base().exists());
}

#[test]
fn entries_are_processed_in_manifest_order() {
    let ctx = TestContextBuilder::new()
        .with_file("b.md", "b.md", "b")
        .with_file("a.md", "a.md", "a")
        .build();
    let dests: Vec<&Path> = ctx.manifest.entries().iter().map(|e| e.dest.as_path()).collect();
    assert_eq!(dests, vec![Path::new("b.md"), Path::new("a.md")]);

    let summary = commands::install::run(&ctx.config(false, false), &Logger::new()).unwrap();
    assert_eq!(summary.installed, 2);
}

// ---------------------------------------------------------------------------
// install_entry properties over every shipped template
// ---------------------------------------------------------------------------

#[test]
fn shipped_templates_install_skip_and_update() {
    let ctx = common::shipped_bundle();
    let config = ctx.config(false, false);
    commands::install::ensure_directories(
        &config.target_dir(),
        &config.manifest,
        false,
        &Logger::new(),
    )
    .unwrap();

    for entry in config.manifest.entries() {
        let resource =
            TemplateFileResource::new(config.source_path(entry), config.dest_path(entry));
        let source_bytes = std::fs::read(&resource.source).unwrap();

        let installed = commands::install::install_entry(&resource, false, false).unwrap();
        assert_eq!(installed, InstallOutcome::Installed);
        assert_eq!(std::fs::read(&resource.dest).unwrap(), source_bytes);

        std::fs::write(&resource.dest, "local").unwrap();
        let skipped = commands::install::install_entry(&resource, false, false).unwrap();
        assert_eq!(skipped, InstallOutcome::Skipped);
        assert_eq!(std::fs::read(&resource.dest).unwrap(), b"local");

        let updated = commands::install::install_entry(&resource, true, false).unwrap();
        assert_eq!(updated, InstallOutcome::Updated);
        assert_eq!(std::fs::read(&resource.dest).unwrap(), source_bytes);
    }
}

#[test]
fn ensure_directories_twice_matches_once() {
    let ctx = common::shipped_bundle();
    let config = ctx.config(false, false);
    let log = Logger::new();

    commands::install::ensure_directories(&config.target_dir(), &config.manifest, false, &log)
        .unwrap();
    let after_first = list_dirs(&config.target_dir());
    let created =
        commands::install::ensure_directories(&config.target_dir(), &config.manifest, false, &log)
            .unwrap();

    assert_eq!(created, 0);
    assert_eq!(list_dirs(&config.target_dir()), after_first);
}

#[test]
fn every_shipped_manifest_source_is_bundled() {
    let repo_bundle = Path::new(env!("CARGO_MANIFEST_DIR")).join(".claude");
    for entry in Manifest::embedded().unwrap().entries() {
        assert!(
            repo_bundle.join(&entry.source).is_file(),
            "manifest source {} is not in the bundled .claude/ directory",
            entry.source.display()
        );
    }
}

fn list_dirs(root: &Path) -> Vec<std::path::PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                out.push(path.clone());
                stack.push(path);
            }
        }
    }
    out.sort();
    out
}
