use super::*;
use std::fs;

#[test]
fn defaults() {
    let s = Settings::default();
    assert_eq!(s.source, None);
    assert_eq!(s.timeout_secs, 30);
    assert_eq!(s.precision, 4);
    assert_eq!(s.timeout(), Duration::from_secs(30));
}

#[test]
fn parses_all_keys() {
    let s = Settings::from_toml_str(
        "source = \"curves.json\"\ntimeout_secs = 5\nprecision = 2\n",
        Path::new("fragility.toml"),
    )
    .unwrap();
    assert_eq!(s.source.as_deref(), Some("curves.json"));
    assert_eq!(s.timeout_secs, 5);
    assert_eq!(s.precision, 2);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let s = Settings::from_toml_str("precision = 6\n", Path::new("f.toml")).unwrap();
    assert_eq!(s.timeout_secs, 30);
    assert_eq!(s.precision, 6);
    assert_eq!(s.source, None);
}

#[test]
fn unknown_key_is_rejected() {
    let err = Settings::from_toml_str("colour = \"red\"\n", Path::new("f.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = Settings::from_toml_str("timeout_secs = 0\n", Path::new("f.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroTimeout));
}

#[test]
fn load_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let s = Settings::load(None, dir.path()).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn load_picks_up_file_in_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "source = \"x.json\"\n").unwrap();
    let s = Settings::load(None, dir.path()).unwrap();
    assert_eq!(s.source.as_deref(), Some("x.json"));
}

#[test]
fn load_explicit_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("other.toml");
    let err = Settings::load(Some(missing.as_path()), dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn source_precedence() {
    let s = Settings {
        source: Some("from-config.json".to_string()),
        ..Settings::default()
    };
    assert_eq!(
        s.resolve_source(Some("flag.json"), Some("env.json".to_string())).unwrap(),
        "flag.json"
    );
    assert_eq!(
        s.resolve_source(None, Some("env.json".to_string())).unwrap(),
        "env.json"
    );
    assert_eq!(s.resolve_source(None, None).unwrap(), "from-config.json");
    assert_eq!(
        s.resolve_source(None, Some("  ".to_string())).unwrap(),
        "from-config.json"
    );
}

#[test]
fn no_source_anywhere() {
    let err = Settings::default().resolve_source(None, None).unwrap_err();
    assert!(matches!(err, ConfigError::NoSource));
}
