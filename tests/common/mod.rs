// Shared helpers for integration tests.
//
// Each test gets its own temporary package bundle and target project through
// the builder below.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code, clippy::expect_used, clippy::new_without_default)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use limpid_cli::config::{InstallConfig, InstallMode, Manifest, ManifestEntry};

/// An isolated package bundle and target project backed by a
/// [`tempfile::TempDir`].
///
/// Layout:
/// - `pkg/.claude/`: bundled directory
/// - `proj/`: target base (not created until something is installed)
pub struct IntegrationTestContext {
    /// Temporary directory holding both the bundle and the target.
    pub root: tempfile::TempDir,
    /// Manifest used by [`config`](Self::config).
    pub manifest: Manifest,
}

impl IntegrationTestContext {
    /// Bundled `.claude/` directory.
    pub fn source_root(&self) -> PathBuf {
        self.root.path().join("pkg/.claude")
    }

    /// Target base directory.
    pub fn target_base(&self) -> PathBuf {
        self.root.path().join("proj")
    }

    /// Installed path of `rel` inside the target's `.claude/`.
    pub fn installed(&self, rel: &str) -> PathBuf {
        self.target_base().join(".claude").join(rel)
    }

    /// Read an installed file as a string.
    pub fn read_installed(&self, rel: &str) -> String {
        std::fs::read_to_string(self.installed(rel)).expect("read installed file")
    }

    /// Overwrite an installed file, simulating a local edit.
    pub fn edit_installed(&self, rel: &str, content: &str) {
        std::fs::write(self.installed(rel), content).expect("edit installed file");
    }

    /// Build a per-file install configuration for this context.
    pub fn config(&self, force: bool, dry_run: bool) -> InstallConfig {
        InstallConfig {
            target_base: self.target_base(),
            source_root: self.source_root(),
            mode: InstallMode::PerFile { force },
            dry_run,
            manifest: self.manifest.clone(),
        }
    }

    /// Run the compiled binary against this context with extra `args`.
    pub fn run_binary(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_limpid-ai"))
            .arg("--path")
            .arg(self.target_base())
            .arg("--source")
            .arg(self.source_root())
            .args(args)
            .output()
            .expect("spawn limpid-ai")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    root: tempfile::TempDir,
    entries: Vec<ManifestEntry>,
}

impl TestContextBuilder {
    /// Begin building a context with an empty bundle and empty manifest.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("pkg/.claude")).expect("create bundle dir");
        Self {
            root,
            entries: Vec::new(),
        }
    }

    /// Add a bundled file at `source` and a manifest entry installing it to `dest`.
    pub fn with_file(mut self, source: &str, dest: &str, content: &str) -> Self {
        let path = self.root.path().join("pkg/.claude").join(source);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create bundle subdir");
        }
        std::fs::write(&path, content).expect("write bundled file");
        self.entries.push(ManifestEntry::new(source, dest));
        self
    }

    /// Add a manifest entry whose source is not bundled.
    pub fn with_missing_file(mut self, source: &str, dest: &str) -> Self {
        self.entries.push(ManifestEntry::new(source, dest));
        self
    }

    /// Remove the bundled directory entirely (a broken package).
    pub fn without_bundle(self) -> Self {
        std::fs::remove_dir_all(self.root.path().join("pkg/.claude")).expect("remove bundle");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        IntegrationTestContext {
            root: self.root,
            manifest: Manifest::new(self.entries).expect("valid manifest"),
        }
    }
}

/// Copy the repository's real bundled `.claude/` directory into a fresh
/// context, paired with the embedded manifest.
pub fn shipped_bundle() -> IntegrationTestContext {
    let repo_bundle = Path::new(env!("CARGO_MANIFEST_DIR")).join(".claude");
    let manifest = Manifest::embedded().expect("embedded manifest");
    let mut builder = TestContextBuilder::new();
    for entry in manifest.entries() {
        let content = std::fs::read_to_string(repo_bundle.join(&entry.source))
            .expect("shipped template exists");
        let source = entry.source.to_string_lossy().into_owned();
        let dest = entry.dest.to_string_lossy().into_owned();
        builder = builder.with_file(&source, &dest, &content);
    }
    builder.build()
}
