//! Loading records and ranking configuration from disk.

use std::io::Write;
use tempfile::NamedTempFile;
use titlerank::{ConfigError, EngineError, MemoryEngine, RankingConfig};

fn temp_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = temp_with(r#"{ "display_limit": 5, "boosts": { "exact_title": 2000 } }"#);
    let raw = std::fs::read_to_string(file.path()).unwrap();
    let config = RankingConfig::from_json_str(&raw).unwrap();

    assert_eq!(config.display_limit, 5);
    assert_eq!(config.boosts.exact_title, 2000);
    assert_eq!(config.boosts.title_prefix, 700);
    assert_eq!(config.fetch_limit, 50);
    assert_eq!(config.generic_tags.len(), 4);
}

#[test]
fn test_zero_limit_rejected() {
    let err = RankingConfig::from_json_str(r#"{ "fetch_limit": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_malformed_config_is_parse_error() {
    let err = RankingConfig::from_json_str("{ display_limit: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_records_from_temp_file() {
    let file = temp_with(r#"[{ "url": "/a/", "meta": { "title": "A" } }, { "url": "/b/" }]"#);
    let engine = MemoryEngine::from_json_file(file.path()).unwrap();
    assert_eq!(engine.len(), 2);
}

#[test]
fn test_missing_records_file_is_init_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MemoryEngine::from_json_file(&dir.path().join("absent.json"))
        .err()
        .expect("missing file should fail");
    assert!(matches!(err, EngineError::Init(_)));
}

#[test]
fn test_bad_records_json_is_decode_error() {
    let file = temp_with(r#"{ "not": "an array" }"#);
    let err = MemoryEngine::from_json_file(file.path())
        .err()
        .expect("object is not a record list");
    assert!(matches!(err, EngineError::Decode(_)));
}
