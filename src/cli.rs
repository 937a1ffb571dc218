//! CLI domain: parse, route, help, and output only.
//! No extraction or rendering logic; single route table dispatches to library services.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
