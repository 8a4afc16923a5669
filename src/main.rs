//! cmdrun - run a registered command from the command line.

mod cli;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use cli::Cli;
use cmdrun::commands::handlers::register_builtins;
use cmdrun::config::Config;
use cmdrun::error::Result;
use cmdrun::{Dispatcher, Logger};
use tracing::{debug, error};

fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    logging::init_stderr_logging();

    match run(&Cli::parse_args()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}: {}", e.category(), e);
            ExitCode::FAILURE
        }
    }
}

/// Builds the logger and dispatcher, then runs the requested command.
///
/// Returns the dispatcher's success flag; `Err` only for start-up failures.
fn run(cli: &Cli) -> Result<bool> {
    let config_path = cli.config_path();
    debug!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;

    // Precedence: CLI flags > environment > config file > defaults
    config.log.apply_env_overrides()?;
    cli.apply_overrides(&mut config.log)?;

    let logger = Arc::new(Logger::console(config.log.color));
    config.log.apply_to(&logger)?;

    let handlers_logger = Arc::clone(&logger);
    let dispatcher = Dispatcher::new(logger)
        .on_first_run(move |registry| register_builtins(registry, handlers_logger));

    Ok(dispatcher.run(&cli.args))
}
