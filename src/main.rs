//! `limpid-ai` entry point: parse arguments, set up logging, run the install.
use std::process::ExitCode;

use clap::Parser;
use limpid_cli::{cli, commands, config::InstallConfig, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    let result = InstallConfig::from_cli(&args).and_then(|config| {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        commands::run(&config, &log, &mut stdin.lock(), &mut stdout)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
