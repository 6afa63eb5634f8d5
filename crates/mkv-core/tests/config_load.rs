use std::io::Write;

use mkv_core::{load_config, ChainConfig, MarkovError, SchemaVersion, DEFAULT_TOLERANCE};

#[test]
fn empty_yaml_mapping_uses_defaults() {
    let config = ChainConfig::from_yaml_str("{}").expect("defaults");
    assert_eq!(config, ChainConfig::default());
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
}

#[test]
fn yaml_overrides_tolerance_and_schema() {
    let yaml = "tolerance: 0.001\nschema_version:\n  major: 2\n  minor: 1\n  patch: 0\n";
    let config = ChainConfig::from_yaml_str(yaml).expect("parse");
    assert_eq!(config.tolerance, 0.001);
    assert_eq!(config.schema_version, SchemaVersion::new(2, 1, 0));
}

#[test]
fn negative_tolerance_is_rejected() {
    let err = ChainConfig::from_yaml_str("tolerance: -0.5").unwrap_err();
    assert!(matches!(err, MarkovError::Config(ref info) if info.code == "invalid-tolerance"));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = ChainConfig::from_yaml_str("tolerance: [1, 2").unwrap_err();
    assert_eq!(err.code(), "config-parse");
}

#[test]
fn loads_config_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "tolerance: 1.0e-9").expect("write");
    let config = load_config(file.path()).expect("load");
    assert_eq!(config.tolerance, 1e-9);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.yaml");
    let err = load_config(&path).unwrap_err();
    assert_eq!(err.code(), "config-read");
    assert!(err.info().context.contains_key("path"));
}
