use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or resolving a [`crate::ReconConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no {dataset} input file configured (set `{key}` or pass --{flag})")]
    MissingInput {
        dataset: String,
        key: &'static str,
        flag: &'static str,
    },
}
