//! Two-way reconciliation between the primary and secondary datasets.
//!
//! Pass 1 emits one row per primary record. Pass 2 emits one row per
//! distinct secondary key, carrying the row counts from both sides.

use tracing::{debug, info_span, warn};

use recon_model::{
    KeyIndex, PrimaryReconRow, ReconStatus, ReconSummary, Record, SecondaryReconRow, SourceTable,
};

use crate::category::CategoryMapper;
use crate::index::{build_index, prepare_primary, prepare_secondary};
use crate::observer::{ReconObserver, ReconPass};

/// Everything a run produces, ready for reporting.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub primary_rows: Vec<PrimaryReconRow>,
    pub secondary_rows: Vec<SecondaryReconRow>,
    pub summary: ReconSummary,
}

/// Pass 1: test every primary record against the secondary index.
///
/// Output order and multiplicity follow the input exactly.
pub fn reconcile_primary(
    records: Vec<Record>,
    secondary_index: &KeyIndex,
    observer: &mut dyn ReconObserver,
) -> Vec<PrimaryReconRow> {
    let pass = ReconPass::PrimaryToSecondary;
    observer.pass_started(pass, records.len());
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let secondary_count = secondary_index.count(&record.key);
        let status = if secondary_count > 0 {
            ReconStatus::AvailableInSecondary
        } else {
            ReconStatus::MissingInSecondary
        };
        rows.push(PrimaryReconRow {
            record,
            status,
            secondary_count,
        });
        observer.item_done(pass);
    }
    observer.pass_finished(pass);
    rows
}

/// Pass 2: test every distinct secondary key against the primary index.
///
/// Rows come out in key order.
pub fn reconcile_secondary(
    secondary_index: &KeyIndex,
    primary_index: &KeyIndex,
    observer: &mut dyn ReconObserver,
) -> Vec<SecondaryReconRow> {
    let pass = ReconPass::SecondaryToPrimary;
    observer.pass_started(pass, secondary_index.len());
    let mut rows = Vec::with_capacity(secondary_index.len());
    for (key, secondary_count) in secondary_index.iter() {
        let primary_count = primary_index.count(key);
        let status = if primary_count > 0 {
            ReconStatus::AvailableInPrimary
        } else {
            ReconStatus::MissingInPrimary
        };
        rows.push(SecondaryReconRow {
            key: key.clone(),
            status,
            secondary_count,
            primary_count,
        });
        observer.item_done(pass);
    }
    observer.pass_finished(pass);
    rows
}

/// Normalize, index and reconcile two validated tables.
pub fn reconcile(
    primary: &SourceTable,
    secondary: &SourceTable,
    mapper: &CategoryMapper,
    observer: &mut dyn ReconObserver,
) -> Reconciliation {
    let span = info_span!(
        "reconcile",
        primary = %primary.label,
        secondary = %secondary.label
    );
    let _guard = span.enter();

    let primary_records = prepare_primary(primary);
    let primary_index = build_index(&primary_records, |record| &record.key);

    let prepared = prepare_secondary(secondary, mapper);
    if !prepared.unmapped.is_empty() {
        warn!(
            dataset = %secondary.label,
            codes = ?prepared.unmapped.to_sorted_vec(),
            rows = prepared.unmapped_rows,
            "missing category mappings"
        );
    }
    let secondary_index = build_index(&prepared.records, |record| &record.key);
    debug!(
        primary_rows = primary_records.len(),
        primary_keys = primary_index.len(),
        secondary_rows = secondary.len(),
        secondary_keys = secondary_index.len(),
        "indexes built"
    );

    let primary_rows = reconcile_primary(primary_records, &secondary_index, observer);
    let secondary_rows = reconcile_secondary(&secondary_index, &primary_index, observer);

    let summary = ReconSummary {
        primary_rows: primary_rows.len(),
        primary_missing_in_secondary: primary_rows
            .iter()
            .filter(|row| row.status.is_missing())
            .count(),
        secondary_rows: secondary.len(),
        secondary_rows_unmapped: prepared.unmapped_rows,
        secondary_keys: secondary_rows.len(),
        secondary_missing_in_primary: secondary_rows
            .iter()
            .filter(|row| row.status.is_missing())
            .count(),
        unmapped_codes: prepared.unmapped.to_sorted_vec(),
    };
    Reconciliation {
        primary_rows,
        secondary_rows,
        summary,
    }
}
