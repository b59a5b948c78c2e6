//! Run pipeline: resolve configuration, load, reconcile, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use recon_core::{CategoryMapper, ReconObserver, reconcile};
use recon_ingest::read_source_table;
use recon_model::{ReconConfig, ReconSummary, RunConfig};
use recon_report::{write_primary_report, write_secondary_report};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub config: Option<PathBuf>,
    pub primary_file: Option<PathBuf>,
    pub secondary_file: Option<PathBuf>,
    pub output_primary_to_secondary: Option<PathBuf>,
    pub output_secondary_to_primary: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub primary_label: Option<String>,
    pub secondary_label: Option<String>,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub summary: ReconSummary,
    pub primary_output: PathBuf,
    pub secondary_output: PathBuf,
    pub log_file: PathBuf,
}

/// Load the config file (if any) and layer the overrides on top.
pub fn load_config(overrides: &RunOverrides) -> Result<ReconConfig> {
    let mut config = match &overrides.config {
        Some(path) => ReconConfig::load(path)?,
        None => ReconConfig::default(),
    };
    if let Some(path) = &overrides.primary_file {
        config.primary_file = Some(path.clone());
    }
    if let Some(path) = &overrides.secondary_file {
        config.secondary_file = Some(path.clone());
    }
    if let Some(path) = &overrides.output_primary_to_secondary {
        config.output_primary_to_secondary = Some(path.clone());
    }
    if let Some(path) = &overrides.output_secondary_to_primary {
        config.output_secondary_to_primary = Some(path.clone());
    }
    if let Some(path) = &overrides.log_file {
        config.log_file = Some(path.clone());
    }
    if let Some(label) = &overrides.primary_label {
        config.labels.primary = label.clone();
    }
    if let Some(label) = &overrides.secondary_label {
        config.labels.secondary = label.clone();
    }
    Ok(config)
}

/// [`load_config`] followed by default resolution.
pub fn resolve_run_config(overrides: &RunOverrides) -> Result<RunConfig> {
    Ok(load_config(overrides)?.resolve()?)
}

/// Execute one reconciliation run.
///
/// Both inputs are loaded and validated before anything is written, so a
/// missing key column leaves no output files behind.
pub fn run_reconciliation(
    config: &RunConfig,
    observer: &mut dyn ReconObserver,
) -> Result<RunResult> {
    let labels = &config.labels;
    let run_span = info_span!(
        "run",
        primary = %labels.primary,
        secondary = %labels.secondary
    );
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let primary = read_source_table(&config.primary_file, &labels.primary)?;
    let secondary = read_source_table(&config.secondary_file, &labels.secondary)?;
    info!(
        primary_rows = primary.len(),
        secondary_rows = secondary.len(),
        "inputs loaded"
    );

    let mapper = CategoryMapper::new(config.category_map.clone());
    let result = reconcile(&primary, &secondary, &mapper, observer);

    write_primary_report(
        &config.output_primary_to_secondary,
        &primary.headers,
        &result.primary_rows,
        labels,
    )
    .context("write primary report")?;
    write_secondary_report(
        &config.output_secondary_to_primary,
        &result.secondary_rows,
        labels,
    )
    .context("write secondary report")?;

    let summary = result.summary;
    info!(
        primary_rows = summary.primary_rows,
        missing_in_secondary = summary.primary_missing_in_secondary,
        secondary_keys = summary.secondary_keys,
        missing_in_primary = summary.secondary_missing_in_primary,
        unmapped_codes = summary.unmapped_codes.len(),
        duration_ms = start.elapsed().as_millis(),
        "reconciliation complete"
    );
    Ok(RunResult {
        summary,
        primary_output: config.output_primary_to_secondary.clone(),
        secondary_output: config.output_secondary_to_primary.clone(),
        log_file: config.log_file.clone(),
    })
}
