//! Run configuration.
//!
//! A config file is optional; every key has a default except the two input
//! paths, which must come from either the file or the command line.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::category::CategoryMap;
use crate::error::ConfigError;
use crate::status::SourceLabels;

/// Log file used when none is configured.
pub const DEFAULT_LOG_FILE: &str = "two_way_recon.log";

/// Configuration as read from TOML, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReconConfig {
    pub primary_file: Option<PathBuf>,
    pub secondary_file: Option<PathBuf>,
    pub output_primary_to_secondary: Option<PathBuf>,
    pub output_secondary_to_primary: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub labels: SourceLabels,
    /// Replaces the built-in table entirely when present.
    pub category_map: CategoryMap,
}

impl ReconConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Apply defaults and require both input paths.
    pub fn resolve(self) -> Result<RunConfig, ConfigError> {
        let primary_file = self.primary_file.ok_or_else(|| ConfigError::MissingInput {
            dataset: self.labels.primary.clone(),
            key: "primary_file",
            flag: "primary",
        })?;
        let secondary_file = self
            .secondary_file
            .ok_or_else(|| ConfigError::MissingInput {
                dataset: self.labels.secondary.clone(),
                key: "secondary_file",
                flag: "secondary",
            })?;
        let primary = self.labels.primary.trim().to_lowercase();
        let secondary = self.labels.secondary.trim().to_lowercase();
        Ok(RunConfig {
            primary_file,
            secondary_file,
            output_primary_to_secondary: self
                .output_primary_to_secondary
                .unwrap_or_else(|| PathBuf::from(format!("{primary}_to_{secondary}_recon.csv"))),
            output_secondary_to_primary: self
                .output_secondary_to_primary
                .unwrap_or_else(|| PathBuf::from(format!("{secondary}_to_{primary}_recon.csv"))),
            log_file: self
                .log_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            labels: self.labels,
            category_map: self.category_map,
        })
    }
}

/// Fully resolved settings for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub primary_file: PathBuf,
    pub secondary_file: PathBuf,
    pub output_primary_to_secondary: PathBuf,
    pub output_secondary_to_primary: PathBuf,
    pub log_file: PathBuf,
    pub labels: SourceLabels,
    pub category_map: CategoryMap,
}
