//! 設定ファイルのテスト

use florascan::config::Config;
use florascan::error::FloraScanError;
use tempfile::tempdir;

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.gallery_limit, 5);
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_base_url("https://flora.example.com".to_string()).unwrap();
    config.set_timeout(10).unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.base_url, "https://flora.example.com");
    assert_eq!(loaded.timeout_seconds, 10);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "timeout_seconds": 5 }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.base_url, Config::default().base_url);
}

#[test]
fn test_broken_file_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ broken").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, FloraScanError::JsonParse(_)));
}

#[test]
fn test_invalid_settings_rejected() {
    let mut config = Config::default();
    assert!(matches!(
        config.set_base_url("localhost:5000".to_string()),
        Err(FloraScanError::Config(_))
    ));
    assert!(matches!(config.set_timeout(0), Err(FloraScanError::Config(_))));
    assert_eq!(config, Config::default());
}

#[test]
fn test_cli_override_wins() {
    let config = Config::default();
    assert_eq!(
        config.resolve_base_url(Some("http://127.0.0.1:8080")),
        "http://127.0.0.1:8080"
    );
}
