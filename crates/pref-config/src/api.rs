//! REST backend connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from("http://localhost:8080")
}

fn default_prefix() -> String {
    String::from("/api")
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("prefs/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Server origin, without the API prefix (actuator endpoints live here).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path prefix of the REST API.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Bypass `HTTP(S)_PROXY` environment settings.
    #[serde(default)]
    pub no_proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            prefix: default_prefix(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            no_proxy: false,
        }
    }
}

impl ApiConfig {
    /// Origin with any trailing slash removed.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// `origin + prefix`, e.g. `http://localhost:8080/api`.
    #[must_use]
    pub fn api_root(&self) -> String {
        let prefix = self.prefix.trim_matches('/');
        if prefix.is_empty() {
            self.origin().to_string()
        } else {
            format!("{}/{prefix}", self.origin())
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-HTTP base URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme_ok =
            self.base_url.starts_with("http://") || self.base_url.starts_with("https://");
        if !scheme_ok {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' must start with http:// or https://", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
