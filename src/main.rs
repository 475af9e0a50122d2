use clap::Parser;

use gabi_audit::cli::{self, Cli, Commands, output};
use gabi_audit::config::app_config::{AppConfig, LogLevel};
use gabi_audit::config::logging::init_logging;
use gabi_audit::core::errors::Result;

fn main() {
    let args = Cli::parse();

    if let Err(e) = run(&args) {
        output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    let config = cli::context::load_config(args)?;
    init_logging(log_level(args, &config), config.log.format)?;

    match &args.command {
        Commands::Write { record } => cli::commands::write::execute(
            &config,
            &cli::context::record_from(record),
            args.quiet,
        ),
        Commands::Envelope { record } => {
            cli::commands::envelope::execute(&config, &cli::context::record_from(record));
            Ok(())
        }
        Commands::Config => {
            cli::commands::config::execute(&config);
            Ok(())
        }
    }
}

/// `--verbose` and `--quiet` win over the configured level.
fn log_level(args: &Cli, config: &AppConfig) -> LogLevel {
    if args.verbose {
        LogLevel::Debug
    } else if args.quiet {
        LogLevel::Error
    } else {
        config.log.level
    }
}
