//! Tests for timing configuration loading.

use maru_narrative::MaruConfig;
use std::io::Write;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = MaruConfig::default();
    assert_eq!(config.transition.page(), Duration::from_millis(1800));
    assert_eq!(config.transition.distortion_rise(), Duration::from_millis(1000));
    assert_eq!(config.transition.distortion_decay(), Duration::from_millis(1200));
    assert_eq!(config.input.wheel_threshold, 50.0);
    assert_eq!(config.input.wheel_cooldown(), Duration::from_secs(2));
    assert_eq!(config.tour.exit_delay(), Duration::from_millis(650));
    assert_eq!(config.detail.close(), Duration::from_millis(400));
}

#[test]
fn test_file_overrides_only_what_it_names() {
    let file = write_config(
        r#"
        [transition]
        page_ms = 900

        [tour]
        edge_inset = 32.0
        "#,
    );

    let config = MaruConfig::from_file(file.path()).unwrap();
    assert_eq!(config.transition.page_ms, 900);
    assert_eq!(config.transition.accent_ms, 1500);
    assert_eq!(config.tour.edge_inset, 32.0);
    assert_eq!(config.tour.card_gap, 20.0);
    assert_eq!(config.input.wheel_cooldown_ms, 2000);
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[transition\npage_ms = ");
    assert!(MaruConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(MaruConfig::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("[input]\nwheel_threshold = -1.0\n");
    let err = MaruConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("wheel_threshold"));
}
