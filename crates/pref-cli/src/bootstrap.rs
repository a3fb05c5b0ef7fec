use anyhow::Context;
use pref_api::App;
use pref_config::PrefsConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PrefsConfig> {
    let config = PrefsConfig::load_with_dotenv().context("failed to load configuration")?;
    warn_misconfigured_env(&config);
    apply_overrides(config, flags)
}

pub fn build_app(config: PrefsConfig) -> anyhow::Result<App> {
    tracing::debug!(
        api_root = %config.api.api_root(),
        backend = ?config.session.backend,
        "starting client"
    );
    App::from_config(config).context("failed to initialize client")
}

fn apply_overrides(mut config: PrefsConfig, flags: &GlobalFlags) -> anyhow::Result<PrefsConfig> {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config.validate().context("invalid --base-url")?;
    }
    Ok(config)
}

fn warn_misconfigured_env(config: &PrefsConfig) {
    let keys = std::env::vars().map(|(key, _)| key);
    for warning in config.suspicious_env_keys(keys) {
        tracing::warn!("{warning}");
    }
}
