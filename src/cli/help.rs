//! CLI help: command-name contract for log fields.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "show", "list", "check").
pub fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None | Some(Commands::Show) => "show",
        Some(Commands::List { .. }) => "list",
        Some(Commands::Check { .. }) => "check",
    }
}
