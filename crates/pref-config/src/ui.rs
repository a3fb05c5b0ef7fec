//! Presentation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_notice_ttl_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// How long a success/error notice stays visible.
    #[serde(default = "default_notice_ttl_secs")]
    pub notice_ttl_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_ttl_secs: default_notice_ttl_secs(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub const fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }
}
