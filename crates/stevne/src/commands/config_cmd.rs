//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::Input;

use stevne_core::DEFAULT_API_URL;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, DEFAULT_PROFILE, Profile};
use crate::error::CliError;
use crate::output;

use super::util;

fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Use `--api-url` when given, otherwise ask on a terminal, otherwise fall
/// back to the local default.
fn api_url(global: &GlobalOpts) -> Result<String, CliError> {
    if let Some(ref url) = global.api_url {
        return Ok(url.clone());
    }
    if !std::io::stdin().is_terminal() {
        return Ok(DEFAULT_API_URL.into());
    }
    Input::new()
        .with_prompt("Roster API URL")
        .default(DEFAULT_API_URL.to_owned())
        .interact_text()
        .map_err(prompt_err)
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let path = config::config_path();
            if path.exists() {
                util::confirm(
                    &format!("Overwrite existing config at {}?", path.display()),
                    global.yes,
                )?;
            }

            let profile_name = global
                .profile
                .clone()
                .unwrap_or_else(|| DEFAULT_PROFILE.into());
            let profile = Profile {
                api_url: api_url(global)?,
                insecure: global.insecure.then_some(true),
                timeout: global.timeout,
                ..Profile::default()
            };

            let mut cfg = Config {
                default_profile: Some(profile_name.clone()),
                ..Config::default()
            };

            // Reject a bad URL before anything is written.
            stevne_config::profile_to_meet_config(&profile, &cfg.defaults)?;
            cfg.profiles.insert(profile_name.clone(), profile);

            let written = config::save_config(&cfg)?;
            output::success(
                &format!(
                    "Configuration written to {} (profile '{profile_name}')",
                    written.display()
                ),
                global,
            );
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let name = config::active_profile_name(global, &cfg);
            let rendered = toml::to_string_pretty(&cfg).map_err(|e| CliError::Render {
                message: e.to_string(),
            })?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |_| format!("# active profile: {name}\n{rendered}"),
                |_| name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
