pub mod cli;
pub mod command_handlers;

pub use cli::{cli_help_lines, parse_cli_verb, CliVerb};
