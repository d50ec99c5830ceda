use std::path::PathBuf;

use serptune::config::{AppConfig, ConfigError, ConfigOverrides, LoggingOverrides, StorageOverrides};
use serptune::favorites::Favorites;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert!(config.storage.path.is_none());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.search.hosts, vec!["google."]);
    assert_eq!(config.favorites, Favorites::builtin());
}

#[test]
fn test_parse_toml() {
    let toml_str = r##"
[storage]
path = "/tmp/serptune/store.json"

[logging]
level = "debug"

[search]
hosts = ["google.", "googleusercontent."]

[favorites]
hl = ["ko"]
"##;

    let config = AppConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/serptune/store.json")));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.search.hosts.len(), 2);
    assert_eq!(config.favorites.hl, vec!["ko"]);
    // Axes not mentioned keep the built-in seed
    assert_eq!(config.favorites.gl, Favorites::builtin().gl);
}

#[test]
fn test_cli_overrides_win_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[storage]\npath = \"/from/file.json\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    let overrides = ConfigOverrides {
        storage: StorageOverrides {
            path: Some(PathBuf::from("/from/cli.json")),
        },
        logging: LoggingOverrides::default(),
    };
    let config = AppConfig::load(Some(path.as_path()), &overrides).unwrap();
    assert_eq!(config.store_path(), PathBuf::from("/from/cli.json"));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfig::load(Some(dir.path().join("nope.toml").as_path()), &ConfigOverrides::default());
    assert!(matches!(result, Err(ConfigError::Missing(_))));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.logging.level = "trace".to_string();
    config.favorites.cr = vec!["countryJP".to_string()];
    config.save(&path).unwrap();

    let loaded = AppConfig::load(Some(path.as_path()), &ConfigOverrides::default()).unwrap();
    assert_eq!(loaded.logging.level, "trace");
    assert_eq!(loaded.favorites.cr, vec!["countryJP"]);
}
