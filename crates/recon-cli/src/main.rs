//! Questionnaire record reconciliation CLI.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser};
use recon_cli::logging::{LogConfig, LogFormat, init_logging};
use recon_cli::pipeline::resolve_run_config;
use recon_cli::summary::print_summary;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_categories, run_recon};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let exit_code = match &cli.command {
        Command::Run(args) => {
            let config = match resolve_run_config(&args.overrides(cli.log_file.clone())) {
                Ok(config) => config,
                Err(error) => fail(&error),
            };
            start_logging(&cli, Some(config.log_file.clone()));
            match run_recon(&config, args) {
                Ok(result) => {
                    print_summary(&result, &config.labels);
                    0
                }
                Err(error) => fail(&error),
            }
        }
        Command::Categories(args) => {
            start_logging(&cli, cli.log_file.clone());
            match run_categories(args) {
                Ok(()) => 0,
                Err(error) => fail(&error),
            }
        }
    };
    std::process::exit(exit_code);
}

fn fail(error: &anyhow::Error) -> ! {
    eprintln!("error: {error:#}");
    std::process::exit(1);
}

fn start_logging(cli: &Cli, log_file: Option<PathBuf>) {
    let log_config = log_config_from_cli(cli).with_log_file(log_file);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config.with_format(format)
}
