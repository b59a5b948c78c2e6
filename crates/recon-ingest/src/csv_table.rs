use std::fs::File;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use recon_model::{KeyColumns, QSCAT, SourceTable, USUBJID, VISIT};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_matches('\u{feff}')
        .to_string()
}

/// Locate the three key columns, failing on the first one that is absent.
///
/// Matching is exact and case-sensitive.
pub fn locate_key_columns(headers: &[String], dataset: &str, path: &Path) -> Result<KeyColumns> {
    let locate = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                dataset: dataset.to_string(),
                path: path.to_path_buf(),
            })
    };
    Ok(KeyColumns {
        subject_id: locate(USUBJID)?,
        visit: locate(VISIT)?,
        category: locate(QSCAT)?,
    })
}

/// Load a comma-separated file with a header row.
///
/// All cells are kept as text, exactly as written; bytes that are not valid
/// UTF-8 become U+FFFD. The header is validated before any data row is read,
/// so a schema error leaves no partial state.
pub fn read_source_table(path: &Path, dataset: &str) -> Result<SourceTable> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                dataset: dataset.to_string(),
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                dataset: dataset.to_string(),
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|err| csv_error(path, &err))?
        .iter()
        .map(normalize_header)
        .collect();
    let key_columns = locate_key_columns(&headers, dataset, path)?;

    let mut rows = Vec::new();
    let mut ragged = 0usize;
    for record in reader.byte_records() {
        let record = record.map_err(|err| csv_error(path, &err))?;
        if record.len() != headers.len() {
            ragged += 1;
        }
        rows.push(pad_record(&record, headers.len()));
    }
    debug!(
        dataset,
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        ragged,
        "loaded source table"
    );
    Ok(SourceTable {
        label: dataset.to_string(),
        path: path.to_path_buf(),
        headers,
        rows,
        key_columns,
    })
}

fn pad_record(record: &ByteRecord, width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| {
            record
                .get(idx)
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .unwrap_or_default()
        })
        .collect()
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
