//! CLI configuration: thin wrapper around `stevne_config` that applies
//! `GlobalOpts` flag overrides (--api-url, --insecure, --timeout).

use stevne_config::ConfigError;
use stevne_core::MeetConfig;
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use stevne_config::{
    Config, DEFAULT_PROFILE, Profile, config_path, load_config, load_config_or_default, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.into())
}

/// Build a `MeetConfig` from the config file, the active profile, and
/// flag overrides. Flags win over env, env over the profile, the profile
/// over built-in defaults.
pub fn resolve_meet_config(global: &GlobalOpts) -> Result<MeetConfig, CliError> {
    let cfg = load_config()?;

    let (name, mut profile) = cfg
        .resolve_profile(global.profile.as_deref())
        .map_err(|e| match e {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: available_profiles(&cfg),
            },
            other => other.into(),
        })?;

    apply_overrides(&mut profile, global);
    debug!(profile = %name, api_url = %profile.api_url, "resolved profile");

    Ok(stevne_config::profile_to_meet_config(&profile, &cfg.defaults)?)
}

fn apply_overrides(profile: &mut Profile, global: &GlobalOpts) {
    if let Some(ref url) = global.api_url {
        profile.api_url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(secs) = global.timeout {
        profile.timeout = Some(secs);
    }
}

fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
