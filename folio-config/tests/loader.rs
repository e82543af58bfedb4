use std::time::Duration;

use folio_config::{ConfigLoadError, ConfigLoader, Settings};

#[test]
fn missing_document_yields_defaults() {
    let load = ConfigLoader::new().load(None).expect("defaults load");
    assert_eq!(load.settings, Settings::default());
    assert!(load.warnings.items.is_empty());
}

#[test]
fn blank_document_yields_defaults() {
    let load = ConfigLoader::new().load(Some("   \n")).expect("defaults load");
    assert_eq!(load.settings.autoplay_period, Duration::from_millis(5000));
}

#[test]
fn json_overrides_are_resolved_into_settings() {
    let raw = r#"{
        "autoplay_period_ms": 7000,
        "section_trigger_offset": 120,
        "success_message": "Thanks!"
    }"#;
    let load = ConfigLoader::new().load_json(raw).expect("valid config");
    assert_eq!(load.settings.autoplay_period, Duration::from_millis(7000));
    assert_eq!(load.settings.section_trigger_offset, 120.0);
    assert_eq!(load.settings.success_message, "Thanks!");
    // untouched values keep their defaults
    assert_eq!(load.settings.anchor_scroll_offset, 80.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ConfigLoader::new()
        .load_json(r#"{ "autoplay_period": 7000 }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Json { .. }));
}

#[test]
fn guard_rail_failures_surface_as_load_errors() {
    let err = ConfigLoader::new()
        .load_json(r#"{ "autoplay_period_ms": 0 }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}
