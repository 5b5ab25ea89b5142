use super::*;

#[test]
fn default_matches_page_contract() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.marker_class, "dark");
    assert_eq!(cfg.root_id, "body");
    assert_eq!(cfg.toggle_id, "themeToggle");
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn from_json_empty_object_uses_defaults() {
    let cfg = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ThemeConfig::default());
}

#[test]
fn from_json_overrides_selected_fields() {
    let cfg = ThemeConfig::from_json(r#"{"toggle_id":"mode-switch","storage_key":"shop_theme"}"#).unwrap();
    assert_eq!(cfg.toggle_id, "mode-switch");
    assert_eq!(cfg.storage_key, "shop_theme");
    assert_eq!(cfg.root_id, DEFAULT_ROOT_ID);
    assert_eq!(cfg.marker_class, DEFAULT_MARKER_CLASS);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = ThemeConfig::from_json(r#"{"palette":"solarized"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("palette")));
}

#[test]
fn from_json_rejects_empty_fields() {
    let err = ThemeConfig::from_json(r#"{"marker_class":"  "}"#).unwrap_err();
    assert_eq!(err, ConfigError::Empty { field: "marker_class" });
    assert_eq!(err.to_string(), "config field 'marker_class' must not be empty");
}

#[test]
fn from_json_rejects_whitespace_in_marker_class() {
    let err = ThemeConfig::from_json(r#"{"marker_class":"night mode"}"#).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { field: "marker_class" });
    assert_eq!(err.to_string(), "config field 'marker_class' must not contain whitespace");
}

#[test]
fn from_json_rejects_whitespace_in_ids() {
    let err = ThemeConfig::from_json(r#"{"root_id":" body"}"#).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { field: "root_id" });
    let err = ThemeConfig::from_json(r#"{"toggle_id":"theme\ttoggle"}"#).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { field: "toggle_id" });
}

#[test]
fn from_json_allows_spaces_in_storage_key() {
    let cfg = ThemeConfig::from_json(r#"{"storage_key":"shop theme"}"#).unwrap();
    assert_eq!(cfg.storage_key, "shop theme");
}

#[test]
fn from_json_or_default_keeps_valid_override() {
    let cfg = ThemeConfig::from_json_or_default(r#"{"toggle_id":"mode-switch"}"#);
    assert_eq!(cfg.toggle_id, "mode-switch");
}

#[test]
fn from_json_or_default_falls_back_on_invalid_input() {
    assert_eq!(ThemeConfig::from_json_or_default("{not json"), ThemeConfig::default());
    assert_eq!(ThemeConfig::from_json_or_default(r#"{"marker_class":"night mode"}"#), ThemeConfig::default());
    assert_eq!(ThemeConfig::from_json_or_default(r#"{"root_id":""}"#), ThemeConfig::default());
}
