//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Two sinks are installed:
//!
//! - a console layer on stderr, whose level follows `-v`/`-q`/`--log-level`
//!   and `RUST_LOG`;
//! - an optional run log, appended to on every run, with timestamps and a
//!   fixed `info` floor so warnings and the completion line are always kept.
//!
//! Only codes and counts are logged, never cell values.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// A type-erased layer over the base registry.
pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

const WORKSPACE_TARGETS: &[&str] = &[
    "recon_cli",
    "recon_core",
    "recon_ingest",
    "recon_model",
    "recon_report",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Console level filter.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` for the console.
    pub use_env_filter: bool,
    /// Whether to include target (module path) in console output.
    pub with_target: bool,
    /// Whether to use ANSI colors on the console.
    pub with_ansi: bool,
    /// Console output format.
    pub format: LogFormat,
    /// Run log path. When set, events are appended to this file.
    pub log_file: Option<PathBuf>,
    /// Level filter for the run log.
    pub file_level: LevelFilter,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            file_level: LevelFilter::INFO,
        }
    }
}

impl LogConfig {
    /// Set the run log path (no run log when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Set console output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// # Errors
///
/// Returns an error if the run log cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let layers = build_layers(config, io::stderr)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(io::Error::other)
}

/// Build the console layer (writing to `console`) and, when configured, the
/// run log layer.
pub fn build_layers<W>(config: &LogConfig, console: W) -> io::Result<Vec<BoxedLayer>>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let mut layers = vec![console_layer(config, console)];
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        layers.push(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_filter(workspace_filter("warn", config.file_level))
                .boxed(),
        );
    }
    Ok(layers)
}

fn console_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = console_filter(config);
    match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_filter(filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .without_time()
            .with_filter(filter)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .without_time()
            .with_filter(filter)
            .boxed(),
    }
}

fn console_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    if config.use_env_filter
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    workspace_filter(&level, config.level_filter)
}

/// `base` applies to external crates, `level` to this workspace's crates.
fn workspace_filter(base: &str, level: LevelFilter) -> EnvFilter {
    let level = level.to_string().to_lowercase();
    let mut directives = base.to_string();
    for target in WORKSPACE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    EnvFilter::new(directives)
}
