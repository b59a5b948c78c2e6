use std::fs;

use recon_cli::logging::{LogConfig, build_layers};
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn run_log_appends_timestamped_events() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("two_way_recon.log");
    fs::write(&path, "previous run\n").expect("seed log");
    let config = LogConfig::default().with_log_file(Some(path.clone()));

    let layers = build_layers(&config, std::io::sink).expect("build layers");
    let subscriber = tracing_subscriber::registry().with(layers);
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(target: "recon_core", codes = ?["UNKNOWN_CODE"], "missing category mappings");
        tracing::info!(target: "recon_cli", primary_rows = 3, "reconciliation complete");
        tracing::debug!(target: "recon_cli", "not recorded");
    });

    let contents = fs::read_to_string(&path).expect("read log");
    assert!(contents.starts_with("previous run\n"));
    assert!(contents.contains("WARN"));
    assert!(contents.contains("missing category mappings"));
    assert!(contents.contains("UNKNOWN_CODE"));
    assert!(contents.contains("reconciliation complete primary_rows=3"));
    assert!(!contents.contains("not recorded"));
}

#[test]
fn console_only_without_log_file() {
    let layers = build_layers(&LogConfig::default(), std::io::sink).expect("build layers");
    assert_eq!(layers.len(), 1);
}
