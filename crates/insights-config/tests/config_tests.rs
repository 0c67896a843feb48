use insights_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_matches_engine_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.forecast.horizon_months, 3);
    assert_eq!(cfg.forecast.transaction_kind, "debit");
    assert_eq!(cfg.anomaly.relative_threshold, 50.0);
    assert_eq!(cfg.anomaly.absolute_threshold, 500.0);
    assert_eq!(cfg.runway.lookback_months, 3);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.anomaly.absolute_threshold = 750.0;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));

    assert_eq!(manager.load().expect("load defaults"), Config::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "currency": "CAD", "anomaly": { "absolute_threshold": 250.0 } }"#)
        .expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.currency, "CAD");
    assert_eq!(loaded.anomaly.absolute_threshold, 250.0);
    assert_eq!(loaded.anomaly.relative_threshold, 50.0);
    assert_eq!(loaded.forecast.horizon_months, 3);
}

#[test]
fn invalid_threshold_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    let mut cfg = Config::default();
    cfg.anomaly.relative_threshold = -1.0;

    let err = manager.save(&cfg).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "anomaly.relative_threshold",
            ..
        }
    ));
}
