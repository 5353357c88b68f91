mod cards;
mod settings_cmd;

use crate::app::cli::{help_text, parse_cli_verb, CliVerb};
use crate::forms::actions::{cmd_create_codes, cmd_send_cards};
use crate::listing::actions::cmd_browse_cards;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let Some(first) = args.first() else {
        return Ok(help_text());
    };
    match parse_cli_verb(first) {
        CliVerb::Send => cmd_send_cards(),
        CliVerb::Create => cmd_create_codes(),
        CliVerb::List => cards::cmd_list_cards(&args[1..]),
        CliVerb::Browse => cmd_browse_cards(),
        CliVerb::Config => settings_cmd::cmd_config(&args[1..]),
        CliVerb::Unknown => Ok(help_text()),
    }
}
