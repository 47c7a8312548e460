//! Install orchestration shared by the per-file and whole-tree modes.
pub mod install;
pub mod replace;

use anyhow::Result;
use std::fmt;
use std::io::{BufRead, Write};

use crate::config::{InstallConfig, InstallMode};
use crate::error::InstallError;
use crate::logging::Log;

/// What happened to a single manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The destination did not exist and was created.
    Installed,
    /// The destination existed and was overwritten (`--force`).
    Updated,
    /// The destination existed and was left as is.
    Skipped,
    /// The bundled source file is absent; the destination was not touched.
    SourceMissing,
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Installed => "installed",
            Self::Updated => "updated",
            Self::Skipped => "skipped",
            Self::SourceMissing => "missing",
        })
    }
}

/// Outcome counts for one run.
///
/// # Examples
///
/// ```
/// use limpid_cli::commands::{InstallOutcome, RunSummary};
///
/// let mut summary = RunSummary::default();
/// summary.record(InstallOutcome::Installed);
/// summary.record(InstallOutcome::Skipped);
/// assert_eq!(summary.to_string(), "1 installed, 0 updated, 1 skipped");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files created.
    pub installed: usize,
    /// Files overwritten.
    pub updated: usize,
    /// Files left untouched because they already existed.
    pub skipped: usize,
    /// Manifest entries whose source was not bundled.
    pub missing: usize,
}

impl RunSummary {
    /// Count one outcome.
    pub const fn record(&mut self, outcome: InstallOutcome) {
        match outcome {
            InstallOutcome::Installed => self.installed += 1,
            InstallOutcome::Updated => self.updated += 1,
            InstallOutcome::Skipped => self.skipped += 1,
            InstallOutcome::SourceMissing => self.missing += 1,
        }
    }

    /// Total number of entries processed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.installed + self.updated + self.skipped + self.missing
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} installed, {} updated, {} skipped",
            self.installed, self.updated, self.skipped
        )?;
        if self.missing > 0 {
            write!(f, ", {} missing", self.missing)?;
        }
        Ok(())
    }
}

/// Result of a whole run, for either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Per-file install finished.
    Installed(RunSummary),
    /// Whole-tree replace finished.
    Replaced(replace::ReplaceOutcome),
}

/// Slash commands and agents a user should reach for after installing.
const NEXT_STEPS: &[&str] = &[
    "1. /limpid:probe        # Discover your codebase",
    "2. /limpid:curate       # Set up structure",
    "3. /limpid:assimilate   # Document features",
];

/// Print the fixed next-step guidance.
pub fn print_next_steps(log: &dyn Log) {
    log.stage("Next steps");
    for step in NEXT_STEPS {
        log.info(step);
    }
    log.info("Or use the orchestrator: @curator \"set up LimpidAI\"");
    log.info("Docs: https://github.com/jubalm/limpid-ai");
}

/// Verify the bundled directory is usable before anything is written.
///
/// # Errors
///
/// Returns [`InstallError::Packaging`] if the bundled directory is absent, or
/// an error if the target `.claude/` directory *is* the bundled directory
/// (installing would copy files onto themselves).
pub fn check_source_root(config: &InstallConfig) -> Result<()> {
    if !config.source_root_exists() {
        return Err(InstallError::Packaging {
            path: config.source_root.clone(),
        }
        .into());
    }
    let target_dir = config.target_dir();
    if let (Ok(source), Ok(target)) = (
        dunce::canonicalize(&config.source_root),
        dunce::canonicalize(&target_dir),
    ) && source == target
    {
        anyhow::bail!(
            "target directory {} is the bundled .claude/ directory",
            target_dir.display()
        );
    }
    Ok(())
}

/// Run the configured install mode.
///
/// `input` and `output` are only used by the interactive replace mode.
///
/// # Errors
///
/// Returns an error on packaging defects and on any filesystem failure.
pub fn run(
    config: &InstallConfig,
    log: &dyn Log,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<RunOutcome> {
    match config.mode {
        InstallMode::PerFile { .. } => install::run(config, log).map(RunOutcome::Installed),
        InstallMode::ReplaceTree => {
            replace::run(config, log, input, output).map(RunOutcome::Replaced)
        }
    }
}
