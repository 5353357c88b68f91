#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Send,
    Create,
    List,
    Browse,
    Config,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "send" => CliVerb::Send,
        "create" => CliVerb::Create,
        "list" => CliVerb::List,
        "browse" => CliVerb::Browse,
        "config" => CliVerb::Config,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  send                        Create gift cards sent by email invitation".to_string(),
        "  create                      Create unclaimed gift cards (claim-later codes)".to_string(),
        "  list [filter] [offset]      Print one page of issued gift cards".to_string(),
        "  browse                      Browse issued gift cards interactively".to_string(),
        "  config show|init <slug>     Inspect or bootstrap ~/.giftdesk/config.yaml".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}
