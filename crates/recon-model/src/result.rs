//! Reconciliation output rows and the run summary.

use serde::Serialize;

use crate::key::{CompositeKey, Record};
use crate::status::ReconStatus;

/// Pass 1 output: one row per primary record, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryReconRow {
    pub record: Record,
    pub status: ReconStatus,
    /// Secondary rows sharing the record's key (0 when missing).
    pub secondary_count: usize,
}

/// Pass 2 output: one row per distinct secondary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryReconRow {
    pub key: CompositeKey,
    pub status: ReconStatus,
    pub secondary_count: usize,
    /// Primary rows sharing the key (0 when missing).
    pub primary_count: usize,
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconSummary {
    pub primary_rows: usize,
    pub primary_missing_in_secondary: usize,
    pub secondary_rows: usize,
    /// Secondary rows dropped because their category code has no mapping.
    pub secondary_rows_unmapped: usize,
    pub secondary_keys: usize,
    pub secondary_missing_in_primary: usize,
    /// Distinct unmapped category codes, sorted.
    pub unmapped_codes: Vec<String>,
}

impl ReconSummary {
    pub fn has_unmapped(&self) -> bool {
        !self.unmapped_codes.is_empty()
    }
}
