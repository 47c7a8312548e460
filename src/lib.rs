//! LimpidAI template installer.
//!
//! Copies the bundled Claude command and agent templates into a project's
//! `.claude/` directory.  Each file is installed independently: existing files
//! are preserved unless `--force` is given, and a missing bundled file is
//! reported without aborting the run.  An `--interactive` mode instead
//! replaces the whole `.claude/` directory after confirmation.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: resolved paths, flags, and the embedded manifest
//! - **[`resources`]**: idempotent `check + apply` primitives (directories, template files)
//! - **[`commands`]**: install orchestration (per-file and whole-tree replace)
//! - **[`logging`]**: `tracing`-backed console output behind the [`logging::Log`] trait
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod resources;
