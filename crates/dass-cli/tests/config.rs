use std::path::PathBuf;

use dass_cli::config::{self, DassConfig, StoreConfig};
use dass_cli::persist::select_store;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = config::load_or_default(&dir.path().join("nope.json")).unwrap();
    assert_eq!(config, DassConfig::default());
    assert_eq!(config.chart.width, 640);
    assert_eq!(config.store, StoreConfig::None);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/config.json");
    let mut config = DassConfig::default();
    config.output_dir = Some(PathBuf::from("/tmp/out"));
    config.store = StoreConfig::S3 {
        region: "eu-west-1".to_string(),
        bucket: "results".to_string(),
        profile: None,
    };

    config::save_config(&path, &config).unwrap();
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(config::load_config(&path).unwrap(), config);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn unversioned_config_is_stamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "store": { "type": "local", "path": "/var/lib/dass" }, "chart": { "width": 800 } }"#,
    )
    .unwrap();

    let config = config::load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(
        config.store,
        StoreConfig::Local {
            path: PathBuf::from("/var/lib/dass")
        }
    );
    assert_eq!(config.chart.width, 800);
    assert_eq!(config.chart.height, 480);
}

#[test]
fn newer_config_is_refused() {
    let json = serde_json::json!({ "config_version": 99 });
    assert!(config::migrate(json, 99).is_err());
}

#[test]
fn oversized_config_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 4294967297 }"#).unwrap();

    let err = config::load_config(&path).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
}

#[test]
fn store_selection_precedence() {
    let configured = StoreConfig::Local {
        path: PathBuf::from("/configured"),
    };

    assert!(select_store(&configured, Some(PathBuf::from("/flag")), true).is_none());
    assert!(select_store(&StoreConfig::None, None, false).is_none());

    let store = select_store(&configured, Some(PathBuf::from("/flag")), false).unwrap();
    assert_eq!(store.describe(), "local:/flag");

    let store = select_store(&configured, None, false).unwrap();
    assert_eq!(store.describe(), "local:/configured");
}
