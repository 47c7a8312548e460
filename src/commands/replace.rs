//! Whole-tree replace: after confirmation, swap the target's `.claude/`
//! directory for a fresh copy of the bundled one.
use anyhow::Result;
use std::io::{BufRead, Write};

use super::{check_source_root, print_next_steps};
use crate::config::InstallConfig;
use crate::error::InstallError;
use crate::logging::Log;
use crate::resources::entry_exists;
use crate::resources::helpers::fs::{copy_dir_recursive, count_files, remove_dir_if_exists};

/// Result of the replace mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The subtree was (or, in dry-run mode, would be) replaced.
    Replaced {
        /// Number of files copied from the bundle.
        files: usize,
    },
    /// The operator declined; nothing was changed.
    Declined,
}

/// Run the whole-tree replace.
///
/// Prompts on `output` and reads one line from `input` if the target
/// `.claude/` directory already exists.
///
/// # Errors
///
/// Returns an error if the bundled directory is missing, stdin cannot be
/// read, or removing/copying fails.  Declining is not an error.
pub fn run(
    config: &InstallConfig,
    log: &dyn Log,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<ReplaceOutcome> {
    check_source_root(config)?;

    let target_dir = config.target_dir();
    log.stage(&format!(
        "Installing LimpidAI to {}",
        config.target_base.display()
    ));

    if entry_exists(&target_dir)? {
        log.warn(&format!("{} already exists", target_dir.display()));
        let prompt = format!(
            "Replace {} with the bundled copy? Files not in the bundle will be deleted. [y/N] ",
            target_dir.display()
        );
        if !confirm(&prompt, input, output)? {
            log.info("Installation cancelled; nothing was changed");
            return Ok(ReplaceOutcome::Declined);
        }
    }

    let files = if config.dry_run {
        let files = count_files(&config.source_root)?;
        log.dry_run(&format!(
            "would replace {} with {files} bundled file(s)",
            target_dir.display()
        ));
        files
    } else {
        remove_dir_if_exists(&target_dir)?;
        let files = copy_dir_recursive(&config.source_root, &target_dir)?;
        log.debug(&format!(
            "copied {} -> {}",
            config.source_root.display(),
            target_dir.display()
        ));
        files
    };

    log.stage("Summary");
    log.info(&format!("Installation complete ({files} file(s) copied)"));
    print_next_steps(log);
    Ok(ReplaceOutcome::Replaced { files })
}

/// Print `prompt` and read one line; `y` or `yes` (any case) confirms.
///
/// End of input counts as a decline.
///
/// # Errors
///
/// Returns [`InstallError::Prompt`] if writing the prompt or reading the
/// answer fails.
pub fn confirm(
    prompt: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<bool, InstallError> {
    write!(output, "{prompt}").map_err(InstallError::Prompt)?;
    output.flush().map_err(InstallError::Prompt)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(InstallError::Prompt)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
