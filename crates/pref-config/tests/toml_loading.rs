//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pref_config::{PrefsConfig, SessionBackend};
use pretty_assertions::assert_eq;

#[test]
fn loads_api_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://prefs.example.edu"
prefix = "/v1"
timeout_secs = 3
"#,
        )?;

        let config: PrefsConfig = Figment::from(Serialized::defaults(PrefsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://prefs.example.edu");
        assert_eq!(config.api.api_root(), "https://prefs.example.edu/v1");
        assert_eq!(config.api.timeout_secs, 3);
        Ok(())
    });
}

#[test]
fn loads_session_backend_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
backend = "keyring"
keyring_service = "prefs-test"
"#,
        )?;

        let config: PrefsConfig = Figment::from(Serialized::defaults(PrefsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.session.backend, SessionBackend::Keyring);
        assert_eq!(config.session.keyring_service, "prefs-test");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".prefs")?;
        jail.create_file(
            ".prefs/config.toml",
            r#"
[ui]
notice_ttl_secs = 9
"#,
        )?;

        let config = PrefsConfig::load().expect("config loads");
        assert_eq!(config.ui.notice_ttl_secs, 9);
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".prefs")?;
        jail.create_file(
            ".prefs/config.toml",
            r#"
[api]
base_url = "localhost:8080"
"#,
        )?;

        let err = PrefsConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
