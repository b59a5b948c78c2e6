pub mod category;
pub mod config;
pub mod error;
pub mod key;
pub mod result;
pub mod status;
pub mod table;

pub use category::CategoryMap;
pub use config::{DEFAULT_LOG_FILE, ReconConfig, RunConfig};
pub use error::ConfigError;
pub use key::{CompositeKey, KeyIndex, Record};
pub use result::{PrimaryReconRow, ReconSummary, SecondaryReconRow};
pub use status::{ReconStatus, SourceLabels};
pub use table::{KeyColumns, QSCAT, SourceTable, USUBJID, VISIT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_index_counts_duplicates() {
        let index: KeyIndex = [
            CompositeKey::new("SUBJ-001", "V1", "Pre-Examination Questionnaire"),
            CompositeKey::new("SUBJ-001", "V1", "Pre-Examination Questionnaire"),
            CompositeKey::new("SUBJ-002", "V1", "Pre-Examination Questionnaire"),
        ]
        .into_iter()
        .collect();
        assert_eq!(index.len(), 2);
        assert_eq!(index.total(), 3);
        assert_eq!(
            index.count(&CompositeKey::new(
                "SUBJ-001",
                "V1",
                "Pre-Examination Questionnaire"
            )),
            2
        );
        assert_eq!(index.count(&CompositeKey::new("SUBJ-003", "V1", "x")), 0);
        assert!(KeyIndex::new().is_empty());
    }

    #[test]
    fn status_renders_with_labels() {
        let labels = SourceLabels::default();
        assert_eq!(
            ReconStatus::AvailableInSecondary.render(&labels),
            "AVAILABLE_IN_CDISC"
        );
        assert_eq!(ReconStatus::MissingInPrimary.render(&labels), "MISSING_IN_DB");
        assert_eq!(
            ReconStatus::MissingInSecondary.comment(&labels),
            "NO_MATCHING_CDISC_RECORD_KEY"
        );
        assert_eq!(ReconStatus::AvailableInPrimary.comment(&labels), "FOUND_IN_DB");
        assert_eq!(labels.secondary_count_column(), "CDISC_ROW_COUNT_FOR_KEY");
        assert_eq!(labels.primary_count_column(), "DB_ROW_COUNT_FOR_KEY");
    }

    #[test]
    fn default_category_map_is_case_sensitive() {
        let map = CategoryMap::default();
        assert_eq!(map.len(), 12);
        assert_eq!(map.get("PRE1"), Some("Pre-Examination Questionnaire"));
        assert_eq!(map.get("pre1"), None);
        assert_eq!(
            map.get("Vineland-3 Comprehensive"),
            Some("Vineland-3 Comprehensive Interview Form")
        );
    }

    #[test]
    fn summary_serializes() {
        let summary = ReconSummary {
            primary_rows: 2,
            unmapped_codes: vec!["UNKNOWN_CODE".to_string()],
            ..ReconSummary::default()
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        assert!(json.contains("\"unmapped_codes\":[\"UNKNOWN_CODE\"]"));
        assert!(summary.has_unmapped());
    }
}
