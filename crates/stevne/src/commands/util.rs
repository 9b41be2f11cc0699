//! Shared helpers for command handlers.

use std::io::IsTerminal;

use stevne_core::{EntityId, Gender, SortDirection};

use crate::cli::GenderArg;
use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to prompt on, a missing `--yes` is an error.
pub fn confirm(message: &str, yes_flag: bool) -> Result<(), CliError> {
    if yes_flag {
        return Ok(());
    }
    let not_confirmed = || CliError::NotConfirmed {
        action: message.into(),
    };
    if !std::io::stdin().is_terminal() {
        return Err(not_confirmed());
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    if confirmed { Ok(()) } else { Err(not_confirmed()) }
}

pub fn gender(arg: GenderArg) -> Gender {
    match arg {
        GenderArg::Male => Gender::Male,
        GenderArg::Female => Gender::Female,
        GenderArg::Other => Gender::Other,
    }
}

pub fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    }
}

pub fn not_found(resource_type: &str, id: &EntityId) -> CliError {
    CliError::NotFound {
        resource_type: resource_type.into(),
        identifier: id.to_string(),
        list_command: format!("{resource_type}s list"),
    }
}
