//! Command dispatch: bridges CLI args -> core stores, editors and views ->
//! output formatting.

pub mod config_cmd;
pub mod disciplines;
pub mod participants;
pub mod results;
pub mod util;

use stevne_core::Meet;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, meet: &Meet, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Participants(args) => participants::handle(meet, args, global).await,
        Command::Disciplines(args) => disciplines::handle(meet, args, global).await,
        Command::Results(args) => results::handle(meet, args, global).await,
        // Config and Completions are handled before a Meet is built
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
