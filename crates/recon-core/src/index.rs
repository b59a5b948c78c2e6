//! Record preparation and per-key counting.

use recon_model::{CompositeKey, KeyIndex, Record, SourceTable};

use crate::category::{CategoryMapper, UnmappedCodes};
use crate::normalize::{normalize, normalize_identifier};

/// Secondary rows whose category code mapped, plus what was left out.
#[derive(Debug, Clone, Default)]
pub struct SecondaryRecords {
    pub records: Vec<Record>,
    pub unmapped: UnmappedCodes,
    /// Rows excluded because their code has no mapping.
    pub unmapped_rows: usize,
}

/// Build one record per primary row. The category is already a full name.
pub fn prepare_primary(table: &SourceTable) -> Vec<Record> {
    let columns = table.key_columns;
    table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let key = CompositeKey::new(
                normalize_identifier(table.cell(idx, columns.subject_id)),
                normalize(table.cell(idx, columns.visit)),
                normalize(table.cell(idx, columns.category)),
            );
            Record::new(row.clone(), key)
        })
        .collect()
}

/// Build records for secondary rows, translating category codes.
///
/// Rows with an unmapped code take no further part in the run; their codes
/// are collected for reporting.
pub fn prepare_secondary(table: &SourceTable, mapper: &CategoryMapper) -> SecondaryRecords {
    let columns = table.key_columns;
    let mut prepared = SecondaryRecords::default();
    for (idx, row) in table.rows.iter().enumerate() {
        let code = normalize(table.cell(idx, columns.category));
        let Some(full_name) = mapper.map_category(&code) else {
            prepared.unmapped.record(&code);
            prepared.unmapped_rows += 1;
            continue;
        };
        let key = CompositeKey::new(
            normalize_identifier(table.cell(idx, columns.subject_id)),
            normalize(table.cell(idx, columns.visit)),
            normalize(Some(full_name)),
        );
        prepared.records.push(Record::new(row.clone(), key));
    }
    prepared
}

/// Count records per composite key.
///
/// Accumulation is commutative, so record order does not affect the result.
pub fn build_index<'a, T, F>(records: impl IntoIterator<Item = &'a T>, key: F) -> KeyIndex
where
    T: 'a,
    F: Fn(&T) -> &CompositeKey,
{
    records
        .into_iter()
        .map(|record| key(record).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use recon_model::{CategoryMap, KeyColumns};

    use super::*;

    fn table(rows: &[[&str; 3]]) -> SourceTable {
        SourceTable {
            label: "test".to_string(),
            path: PathBuf::from("test.csv"),
            headers: vec!["USUBJID".into(), "VISIT".into(), "QSCAT".into()],
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
            key_columns: KeyColumns {
                subject_id: 0,
                visit: 1,
                category: 2,
            },
        }
    }

    #[test]
    fn primary_keys_are_normalized_but_values_kept() {
        let records = prepare_primary(&table(&[[
            "SUBJ-001.0",
            " V1 ",
            "Pre-Examination   Questionnaire",
        ]]));
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].key,
            CompositeKey::new("SUBJ-001", "V1", "Pre-Examination Questionnaire")
        );
        assert_eq!(records[0].values[1], " V1 ");
    }

    #[test]
    fn secondary_codes_are_translated_or_excluded() {
        let mapper = CategoryMapper::new(CategoryMap::default());
        let prepared = prepare_secondary(
            &table(&[
                ["SUBJ-001", "V1", " PRE1 "],
                ["SUBJ-001", "V1", "UNKNOWN_CODE"],
                ["SUBJ-002", "V1", "UNKNOWN_CODE"],
            ]),
            &mapper,
        );
        assert_eq!(prepared.records.len(), 1);
        assert_eq!(
            prepared.records[0].key.category,
            "Pre-Examination Questionnaire"
        );
        assert_eq!(prepared.unmapped_rows, 2);
        assert_eq!(prepared.unmapped.to_sorted_vec(), vec!["UNKNOWN_CODE"]);
    }

    #[test]
    fn index_total_matches_record_count() {
        let records = prepare_primary(&table(&[
            ["A", "V1", "X"],
            ["A", "V1", "X"],
            ["A.0", "V1", "X"],
            ["B", "V2", "X"],
        ]));
        let index = build_index(&records, |record| &record.key);
        assert_eq!(index.total(), records.len());
        assert_eq!(index.len(), 2);
        assert_eq!(index.count(&CompositeKey::new("A", "V1", "X")), 3);
    }

    #[test]
    fn index_ignores_record_order() {
        let mut records = prepare_primary(&table(&[
            ["A", "V1", "X"],
            ["B", "V1", "X"],
            ["A", "V1", "X"],
        ]));
        let forward = build_index(&records, |record| &record.key);
        records.reverse();
        let backward = build_index(&records, |record| &record.key);
        assert_eq!(forward, backward);
    }
}
