use std::fs;
use std::path::PathBuf;

use recon_model::{CategoryMap, ConfigError, DEFAULT_LOG_FILE, ReconConfig};

#[test]
fn empty_config_uses_defaults_but_requires_inputs() {
    let config = ReconConfig::from_toml_str("").expect("parse empty config");
    assert_eq!(config.category_map, CategoryMap::default());
    assert_eq!(config.labels.primary, "DB");

    let err = config.resolve().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingInput {
            key: "primary_file",
            ..
        }
    ));
}

#[test]
fn empty_category_table_is_kept_empty() {
    let config = ReconConfig::from_toml_str("[category_map]\n").expect("parse config");
    assert!(config.category_map.is_empty());
}

#[test]
fn resolve_derives_output_names_from_labels() {
    let config = ReconConfig::from_toml_str(
        r#"
primary_file = "db.csv"
secondary_file = "qs.csv"
"#,
    )
    .expect("parse config");
    let run = config.resolve().expect("resolve");
    assert_eq!(run.primary_file, PathBuf::from("db.csv"));
    assert_eq!(
        run.output_primary_to_secondary,
        PathBuf::from("db_to_cdisc_recon.csv")
    );
    assert_eq!(
        run.output_secondary_to_primary,
        PathBuf::from("cdisc_to_db_recon.csv")
    );
    assert_eq!(run.log_file, PathBuf::from(DEFAULT_LOG_FILE));
}

#[test]
fn category_map_replaces_default_table() {
    let config = ReconConfig::from_toml_str(
        r#"
primary_file = "db.csv"
secondary_file = "qs.csv"

[labels]
primary = "EDC"
secondary = "SDTM"

[category_map]
PRE1 = "Pre-Examination Questionnaire"
"#,
    )
    .expect("parse config");
    assert_eq!(config.category_map.len(), 1);
    assert_eq!(config.category_map.get("AIMS01"), None);

    let run = config.resolve().expect("resolve");
    assert_eq!(
        run.output_primary_to_secondary,
        PathBuf::from("edc_to_sdtm_recon.csv")
    );
    assert_eq!(run.labels.secondary_count_column(), "SDTM_ROW_COUNT_FOR_KEY");
}

#[test]
fn unknown_keys_are_rejected() {
    let result = ReconConfig::from_toml_str("key_fields = [\"USUBJID\"]\n");
    assert!(result.is_err());
}

#[test]
fn load_reports_path_on_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("recon.toml");
    fs::write(&path, "primary_file = [").expect("write config");

    let err = ReconConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("recon.toml"));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ReconConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
