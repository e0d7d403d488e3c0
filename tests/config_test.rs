//! Integration tests for Settings loading with layered precedence.
//!
//! Layers (lowest to highest): defaults → global file → explicit file → SOLID_* env vars.
//! File tests pass `with_env = false` so the process environment cannot leak in.

use std::fs;

use tempfile::TempDir;

use solid::application::ApplicationError;
use solid::config::Settings;
use solid::domain::{Channel, DomainError};

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_global_file_when_loading_then_overrides_defaults_per_key() {
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "global.toml",
        r#"
[notification]
channel = "sms"

[payment]
cash = 75.0
"#,
    );

    let settings = Settings::load_from(Some(&global), None, false).expect("load settings");

    assert_eq!(settings.notification.channel().unwrap(), Channel::Sms);
    assert_eq!(settings.notification.message, "Hello, this is a notification!");
    assert_eq!(settings.payment.cash, 75.0);
    assert_eq!(settings.payment.credit_card, 100.0);
}

#[test]
fn given_global_and_local_files_when_loading_then_local_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(
        &dir,
        "global.toml",
        r#"
[notification]
channel = "sms"
message = "from global"
"#,
    );
    let local = write_config(
        &dir,
        "local.toml",
        r#"
[notification]
channel = "push"
"#,
    );

    let settings = Settings::load_from(Some(&global), Some(&local), false).expect("load settings");

    assert_eq!(settings.notification.channel().unwrap(), Channel::Push);
    assert_eq!(settings.notification.message, "from global");
}

#[test]
fn given_missing_global_file_when_loading_then_is_skipped() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let settings = Settings::load_from(Some(&missing), None, false).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_file_when_loading_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = Settings::load_from(None, Some(&missing), false).unwrap_err();

    match err {
        ApplicationError::Config { message } => assert!(message.contains("absent.toml")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn given_unknown_channel_when_loading_then_rejects_settings() {
    let dir = TempDir::new().unwrap();
    let local = write_config(
        &dir,
        "local.toml",
        r#"
[notification]
channel = "pigeon"
"#,
    );

    let err = Settings::load_from(None, Some(&local), false).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::UnknownChannel(ref name)) if name == "pigeon"
    ));
}

#[test]
fn given_malformed_file_when_loading_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let local = write_config(&dir, "broken.toml", "[notification\nchannel = ");

    let err = Settings::load_from(None, Some(&local), false).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_env_override_when_loading_then_env_wins_over_files() {
    let dir = TempDir::new().unwrap();
    let local = write_config(
        &dir,
        "local.toml",
        r#"
[notification]
channel = "sms"
"#,
    );

    std::env::set_var("SOLID_NOTIFICATION__CHANNEL", "push");
    let result = Settings::load_from(None, Some(&local), true);
    std::env::remove_var("SOLID_NOTIFICATION__CHANNEL");

    let settings = result.expect("load settings");
    assert_eq!(settings.notification.channel().unwrap(), Channel::Push);
}

#[test]
fn given_template_when_written_and_loaded_then_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "solid.toml", &Settings::template());

    let settings = Settings::load_from(None, Some(&path), false).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_loaded_settings_when_shown_then_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let local = write_config(
        &dir,
        "local.toml",
        r#"
[notification]
message = "custom"
"#,
    );
    let settings = Settings::load_from(None, Some(&local), false).expect("load settings");

    let shown = settings.to_toml().unwrap();
    let reparsed: Settings = toml::from_str(&shown).unwrap();

    assert_eq!(reparsed, settings);
}
