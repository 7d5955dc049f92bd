//! Tests for configuration loading

use plugreq::config::Config;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.make.archive_name, "plugin.zip");
    assert_eq!(config.moderation.token_env, "GITHUB_TOKEN");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[docs]\nurl = \"https://docs.test\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.docs.url, "https://docs.test");
    assert_eq!(config.endpoints, Config::default().endpoints);
}

#[test]
fn save_then_load_keeps_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.endpoints.build_url = "http://localhost:8439".to_string();

    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[docs\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid config"));
}
