//! Reconciliation statuses and the source labels used to render them.

use serde::Deserialize;

/// Display names for the two datasets.
///
/// Labels drive status strings (`MISSING_IN_CDISC`), count column names
/// (`CDISC_ROW_COUNT_FOR_KEY`) and default output file names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceLabels {
    pub primary: String,
    pub secondary: String,
}

impl Default for SourceLabels {
    fn default() -> Self {
        Self {
            primary: "DB".to_string(),
            secondary: "CDISC".to_string(),
        }
    }
}

impl SourceLabels {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Column holding the secondary row count for a key.
    pub fn secondary_count_column(&self) -> String {
        count_column(&self.secondary)
    }

    /// Column holding the primary row count for a key.
    pub fn primary_count_column(&self) -> String {
        count_column(&self.primary)
    }
}

fn count_column(label: &str) -> String {
    format!("{}_ROW_COUNT_FOR_KEY", upper(label))
}

/// Outcome of testing one key against the opposite dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconStatus {
    /// Primary key found in the secondary index.
    AvailableInSecondary,
    /// Primary key absent from the secondary index.
    MissingInSecondary,
    /// Secondary key found in the primary index.
    AvailableInPrimary,
    /// Secondary key absent from the primary index.
    MissingInPrimary,
}

impl ReconStatus {
    pub fn is_missing(self) -> bool {
        matches!(self, Self::MissingInSecondary | Self::MissingInPrimary)
    }

    /// Status as written to `RECON_STATUS`.
    pub fn render(self, labels: &SourceLabels) -> String {
        match self {
            Self::AvailableInSecondary => format!("AVAILABLE_IN_{}", upper(&labels.secondary)),
            Self::MissingInSecondary => format!("MISSING_IN_{}", upper(&labels.secondary)),
            Self::AvailableInPrimary => format!("AVAILABLE_IN_{}", upper(&labels.primary)),
            Self::MissingInPrimary => format!("MISSING_IN_{}", upper(&labels.primary)),
        }
    }

    /// Explanation written to `COMMENT`.
    pub fn comment(self, labels: &SourceLabels) -> String {
        match self {
            Self::AvailableInSecondary => format!("FOUND_IN_{}", upper(&labels.secondary)),
            Self::MissingInSecondary => {
                format!("NO_MATCHING_{}_RECORD_KEY", upper(&labels.secondary))
            }
            Self::AvailableInPrimary => format!("FOUND_IN_{}", upper(&labels.primary)),
            Self::MissingInPrimary => {
                format!("NO_MATCHING_{}_RECORD_KEY", upper(&labels.primary))
            }
        }
    }
}

fn upper(label: &str) -> String {
    label.trim().to_uppercase()
}
