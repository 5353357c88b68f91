use giftdesk::app::{cli_help_lines, parse_cli_verb, CliVerb};

#[test]
fn app_cli_module_parses_known_verbs() {
    assert_eq!(parse_cli_verb("send"), CliVerb::Send);
    assert_eq!(parse_cli_verb("create"), CliVerb::Create);
    assert_eq!(parse_cli_verb("list"), CliVerb::List);
    assert_eq!(parse_cli_verb("browse"), CliVerb::Browse);
    assert_eq!(parse_cli_verb("config"), CliVerb::Config);
    assert_eq!(parse_cli_verb("destroy"), CliVerb::Unknown);
}

#[test]
fn app_cli_module_help_covers_every_verb() {
    let help = cli_help_lines().join("\n");
    for verb in ["send", "create", "list", "browse", "config"] {
        assert!(help.contains(verb), "help is missing `{verb}`");
    }
}
