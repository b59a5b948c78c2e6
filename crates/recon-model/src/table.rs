use std::path::PathBuf;

/// Subject identifier column.
pub const USUBJID: &str = "USUBJID";
/// Visit column.
pub const VISIT: &str = "VISIT";
/// Questionnaire category column (full name in the primary dataset, short
/// code in the secondary dataset).
pub const QSCAT: &str = "QSCAT";

/// Header positions of the three key columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColumns {
    pub subject_id: usize,
    pub visit: usize,
    pub category: usize,
}

/// A fully loaded input file whose key columns have been located.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub label: String,
    pub path: PathBuf,
    pub headers: Vec<String>,
    /// Cell values, each row padded to `headers.len()`.
    pub rows: Vec<Vec<String>>,
    pub key_columns: KeyColumns,
}

impl SourceTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `column` for `row`; `None` when the row is shorter than the header.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map(String::as_str)
    }
}
