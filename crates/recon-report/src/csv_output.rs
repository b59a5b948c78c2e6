//! Result table writers.
//!
//! Each writer owns its file handle for the duration of the call only.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use tracing::info;

use recon_model::{PrimaryReconRow, SecondaryReconRow, SourceLabels, USUBJID, VISIT};

use crate::error::{ReportError, Result};

/// Status column appended to both tables.
pub const RECON_STATUS: &str = "RECON_STATUS";
/// Free-text explanation column appended to both tables.
pub const COMMENT: &str = "COMMENT";
/// Full category name column of the secondary table.
pub const QSCAT_FULL: &str = "QSCAT_FULL";

/// Header of the primary-to-secondary table.
pub fn primary_report_headers(source_headers: &[String], labels: &SourceLabels) -> Vec<String> {
    let mut headers = source_headers.to_vec();
    headers.push(RECON_STATUS.to_string());
    headers.push(labels.secondary_count_column());
    headers.push(COMMENT.to_string());
    headers
}

/// Header of the secondary-to-primary table.
pub fn secondary_report_headers(labels: &SourceLabels) -> Vec<String> {
    vec![
        USUBJID.to_string(),
        VISIT.to_string(),
        QSCAT_FULL.to_string(),
        RECON_STATUS.to_string(),
        labels.secondary_count_column(),
        labels.primary_count_column(),
        COMMENT.to_string(),
    ]
}

/// Write pass 1 results: the original primary columns followed by status,
/// secondary count and comment. Returns the number of data rows written.
pub fn write_primary_report(
    path: &Path,
    source_headers: &[String],
    rows: &[PrimaryReconRow],
    labels: &SourceLabels,
) -> Result<usize> {
    let mut writer = create_writer(path)?;
    write_record(&mut writer, path, primary_report_headers(source_headers, labels))?;
    for row in rows {
        let mut record = row.record.values.clone();
        record.push(row.status.render(labels));
        record.push(row.secondary_count.to_string());
        record.push(row.status.comment(labels));
        write_record(&mut writer, path, record)?;
    }
    finish(writer, path)?;
    info!(path = %path.display(), rows = rows.len(), "wrote primary report");
    Ok(rows.len())
}

/// Write pass 2 results: one line per distinct secondary key.
pub fn write_secondary_report(
    path: &Path,
    rows: &[SecondaryReconRow],
    labels: &SourceLabels,
) -> Result<usize> {
    let mut writer = create_writer(path)?;
    write_record(&mut writer, path, secondary_report_headers(labels))?;
    for row in rows {
        write_record(
            &mut writer,
            path,
            [
                row.key.subject_id.clone(),
                row.key.visit.clone(),
                row.key.category.clone(),
                row.status.render(labels),
                row.secondary_count.to_string(),
                row.primary_count.to_string(),
                row.status.comment(labels),
            ],
        )?;
    }
    finish(writer, path)?;
    info!(path = %path.display(), rows = rows.len(), "wrote secondary report");
    Ok(rows.len())
}

fn create_writer(path: &Path) -> Result<Writer<File>> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WriterBuilder::new().from_writer(file))
}

fn write_record<I>(writer: &mut Writer<File>, path: &Path, record: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    writer
        .write_record(record)
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn finish(mut writer: Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
