// SPDX-License-Identifier: MPL-2.0
use leaf_loaf::config::{self, Config};
use leaf_loaf::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    let i18n = I18n::new(None, &loaded_config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_backend_overrides_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        backend_url: Some("https://staging.leaf-loaf.test".to_string()),
        backend_anon_key: Some("staging-key".to_string()),
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.backend_url(), "https://staging.leaf-loaf.test");
    assert_eq!(loaded.backend_anon_key(), "staging-key");
}

#[test]
fn test_every_screen_string_is_translated() {
    // The embedded en-US bundle must cover the keys the screens look up;
    // a missing key would leak "MISSING: ..." into the UI.
    let i18n = I18n::default();
    for key in [
        "app-window-title",
        "opening-brand",
        "opening-tagline",
        "signup-title",
        "signup-continue-email",
        "divider-or",
        "signin-title",
        "signin-with-email",
        "signup-email-title",
        "signup-password-title",
        "signup-name-title",
        "signup-terms",
        "error-title",
        "error-missing-fields",
        "error-not-signed-in",
        "pincode-title",
        "pincode-check-delivery",
        "pincode-unavailable-title",
        "pincode-unavailable-retry",
        "address-title",
        "address-save",
        "address-type-home",
        "home-deliver-to",
        "home-greeting-question",
        "home-offers-title",
        "notes-title",
        "notes-my-notes",
        "profile-your-information",
        "profile-logout",
        "gallery-title",
        "tab-home",
        "tab-notes",
        "tab-profile",
        "alert-ok",
    ] {
        let translated = i18n.tr(key);
        assert!(
            !translated.starts_with("MISSING:"),
            "untranslated key: {key}"
        );
    }
}
