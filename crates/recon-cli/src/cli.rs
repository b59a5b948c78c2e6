//! CLI argument definitions for the reconciliation tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use recon_cli::pipeline::RunOverrides;

#[derive(Parser)]
#[command(
    name = "qs-recon",
    version,
    about = "Two-way reconciliation of questionnaire records",
    long_about = "Compare a database export against a CDISC QS export.\n\n\
                  Records are matched on (USUBJID, VISIT, QSCAT), with CDISC \
                  category codes translated to full names first. Two CSV \
                  reports are written, one per direction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Console log format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append the run log to this file (default: two_way_recon.log).
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the primary and secondary datasets.
    Run(RunArgs),

    /// Show the effective category code table.
    Categories(CategoriesArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Primary (database) export.
    #[arg(long = "primary", value_name = "PATH")]
    pub primary: Option<PathBuf>,

    /// Secondary (CDISC) export.
    #[arg(long = "secondary", value_name = "PATH")]
    pub secondary: Option<PathBuf>,

    /// Output path for the primary -> secondary report.
    #[arg(long = "out-primary", value_name = "PATH")]
    pub out_primary: Option<PathBuf>,

    /// Output path for the secondary -> primary report.
    #[arg(long = "out-secondary", value_name = "PATH")]
    pub out_secondary: Option<PathBuf>,

    /// Display name of the primary dataset (default: DB).
    #[arg(long = "primary-label", value_name = "NAME")]
    pub primary_label: Option<String>,

    /// Display name of the secondary dataset (default: CDISC).
    #[arg(long = "secondary-label", value_name = "NAME")]
    pub secondary_label: Option<String>,

    /// Disable progress bars.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl RunArgs {
    pub fn overrides(&self, log_file: Option<PathBuf>) -> RunOverrides {
        RunOverrides {
            config: self.config.clone(),
            primary_file: self.primary.clone(),
            secondary_file: self.secondary.clone(),
            output_primary_to_secondary: self.out_primary.clone(),
            output_secondary_to_primary: self.out_secondary.clone(),
            log_file,
            primary_label: self.primary_label.clone(),
            secondary_label: self.secondary_label.clone(),
        }
    }
}

#[derive(Args)]
pub struct CategoriesArgs {
    /// TOML configuration file whose `category_map` should be shown.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
