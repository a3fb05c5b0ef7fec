//! # pref-config
//!
//! Layered configuration loading for the preference client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PREFS_*` prefix, `__` as separator)
//! 2. Project-level `.prefs/config.toml`
//! 3. User-level `~/.config/prefs/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `PREFS_API__BASE_URL` -> `api.base_url`, `PREFS_SESSION__BACKEND` ->
//! `session.backend`, `PREFS_UI__NOTICE_TTL_SECS` -> `ui.notice_ttl_secs`.
//!
//! # Usage
//!
//! ```no_run
//! use pref_config::PrefsConfig;
//!
//! let config = PrefsConfig::load_with_dotenv().expect("config");
//! println!("API root: {}", config.api.api_root());
//! ```

mod api;
mod error;
mod session;
mod ui;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use session::{SessionBackend, SessionConfig};
pub use ui::UiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "PREFS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PrefsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl PrefsConfig {
    /// Load configuration from TOML files and environment variables, then validate.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if any), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".prefs/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    /// Sections still at defaults although `PREFS_<SECTION>*` env keys exist,
    /// which usually means a single underscore was used as separator.
    #[must_use]
    pub fn suspicious_env_keys<I>(&self, env_keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let keys = env_keys.into_iter().collect::<Vec<_>>();
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let checks = [
            ("PREFS_API", self.api.base_url == defaults.api.base_url, "PREFS_API__BASE_URL"),
            (
                "PREFS_SESSION",
                self.session.backend == defaults.session.backend,
                "PREFS_SESSION__BACKEND",
            ),
            (
                "PREFS_UI",
                self.ui.notice_ttl_secs == defaults.ui.notice_ttl_secs,
                "PREFS_UI__NOTICE_TTL_SECS",
            ),
        ];

        for (prefix, still_default, example) in checks {
            let nested = format!("{prefix}__");
            let mistyped = keys
                .iter()
                .any(|key| key.starts_with(prefix) && !key.starts_with(&nested));
            if still_default && mistyped {
                warnings.push(format!(
                    "{prefix}* env vars exist but the section kept its defaults. Use double underscores (example: {example})."
                ));
            }
        }

        warnings
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prefs").join("config.toml"))
    }
}
