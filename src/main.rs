//! `wpdev` binary: scaffold a local WordPress development environment.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use wpdev_cli::cli::Cli;
use wpdev_cli::commands::scaffold::{self, RunState, ScaffoldOptions};
use wpdev_cli::config::prompt;
use wpdev_cli::error::ConfigError;
use wpdev_cli::exec::SystemExecutor;
use wpdev_cli::logging::{self, Log, Logger, Palette};

/// Name of the log file under the cache directory.
const COMMAND: &str = "scaffold";

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let log_file = logging::init_subscriber(args.verbose, logging::log_file_path(COMMAND));
    let logger = Arc::new(Logger::new(log_file, Palette::for_stdout()));
    let log: Arc<dyn Log> = Arc::clone(&logger) as Arc<dyn Log>;

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            logger.error(&ConfigError::CurrentDir(e).to_string());
            return ExitCode::FAILURE;
        }
    };

    let prompter = prompt::for_session(!args.no_input);
    let outcome = scaffold::run(
        &ScaffoldOptions::from(&args),
        &log,
        prompter.as_ref(),
        Arc::new(SystemExecutor),
        &cwd,
    );

    // Failures were already reported as they happened.
    logger.print_summary();
    if outcome.state == RunState::Done
        && let Some(config) = &outcome.config
    {
        scaffold::print_next_steps(logger.as_ref(), config);
    }

    ExitCode::from(outcome.exit_code())
}
