//! Command-line argument definitions.
use clap::Parser;
use std::path::PathBuf;

/// Install the LimpidAI command and agent templates into a project's `.claude/` directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "limpid-ai",
    about = "Install LimpidAI templates into a project's .claude/ directory",
    version = option_env!("LIMPID_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
pub struct Cli {
    /// Target project directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Overwrite files that already exist
    #[arg(long, conflicts_with = "interactive")]
    pub force: bool,

    /// Confirm, then replace the whole .claude/ directory with the bundled copy
    #[arg(long)]
    pub interactive: bool,

    /// Override the bundled .claude/ directory
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
