use std::fs;

use recon_model::{
    CompositeKey, PrimaryReconRow, ReconStatus, Record, SecondaryReconRow, SourceLabels,
};
use recon_report::{write_primary_report, write_secondary_report};

const PRE: &str = "Pre-Examination Questionnaire";

fn read(path: &std::path::Path) -> String {
    fs::read_to_string(path)
        .expect("read output")
        .replace("\r\n", "\n")
}

#[test]
fn primary_report_appends_status_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("db_to_cdisc_recon.csv");
    let headers = vec![
        "SITE".to_string(),
        "USUBJID".to_string(),
        "VISIT".to_string(),
        "QSCAT".to_string(),
    ];
    let rows = vec![
        PrimaryReconRow {
            record: Record::new(
                vec!["01".into(), "SUBJ-001".into(), "V1".into(), PRE.into()],
                CompositeKey::new("SUBJ-001", "V1", PRE),
            ),
            status: ReconStatus::AvailableInSecondary,
            secondary_count: 12,
        },
        PrimaryReconRow {
            record: Record::new(
                vec!["01".into(), "SUBJ-002".into(), "V1".into(), PRE.into()],
                CompositeKey::new("SUBJ-002", "V1", PRE),
            ),
            status: ReconStatus::MissingInSecondary,
            secondary_count: 0,
        },
    ];

    let written =
        write_primary_report(&path, &headers, &rows, &SourceLabels::default()).expect("write");

    assert_eq!(written, 2);
    insta::assert_snapshot!(read(&path), @r"
    SITE,USUBJID,VISIT,QSCAT,RECON_STATUS,CDISC_ROW_COUNT_FOR_KEY,COMMENT
    01,SUBJ-001,V1,Pre-Examination Questionnaire,AVAILABLE_IN_CDISC,12,FOUND_IN_CDISC
    01,SUBJ-002,V1,Pre-Examination Questionnaire,MISSING_IN_CDISC,0,NO_MATCHING_CDISC_RECORD_KEY
    ");
}

#[test]
fn secondary_report_has_one_line_per_key() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cdisc_to_db_recon.csv");
    let rows = vec![
        SecondaryReconRow {
            key: CompositeKey::new(
                "SUBJ-001",
                "V1",
                "Hammersmith Infant Neurological Examination, Section 2 (HINE-2)",
            ),
            status: ReconStatus::AvailableInPrimary,
            secondary_count: 26,
            primary_count: 1,
        },
        SecondaryReconRow {
            key: CompositeKey::new("SUBJ-003", "V2", PRE),
            status: ReconStatus::MissingInPrimary,
            secondary_count: 4,
            primary_count: 0,
        },
    ];

    write_secondary_report(&path, &rows, &SourceLabels::default()).expect("write");

    insta::assert_snapshot!(read(&path), @r#"
    USUBJID,VISIT,QSCAT_FULL,RECON_STATUS,CDISC_ROW_COUNT_FOR_KEY,DB_ROW_COUNT_FOR_KEY,COMMENT
    SUBJ-001,V1,"Hammersmith Infant Neurological Examination, Section 2 (HINE-2)",AVAILABLE_IN_DB,26,1,FOUND_IN_DB
    SUBJ-003,V2,Pre-Examination Questionnaire,MISSING_IN_DB,4,0,NO_MATCHING_DB_RECORD_KEY
    "#);
}

#[test]
fn labels_rename_count_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    let labels = SourceLabels::new("edc", "sdtm");

    write_secondary_report(&path, &[], &labels).expect("write");

    assert_eq!(
        read(&path).lines().next(),
        Some(
            "USUBJID,VISIT,QSCAT_FULL,RECON_STATUS,SDTM_ROW_COUNT_FOR_KEY,EDC_ROW_COUNT_FOR_KEY,COMMENT"
        )
    );
}

#[test]
fn unwritable_path_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing-dir").join("out.csv");
    let err = write_secondary_report(&path, &[], &SourceLabels::default()).unwrap_err();
    assert!(err.to_string().contains("failed to create output file"));
}
