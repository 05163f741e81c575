use clap::{CommandFactory, Parser};

use dass_cli::cli::{Cli, Command, ConfigAction};

#[test]
fn clap_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn no_subcommand_means_take() {
    let cli = Cli::try_parse_from(["dass"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn answers_split_on_commas() {
    let cli = Cli::try_parse_from(["dass", "take", "--answers", "0,1,Often", "--report"]).unwrap();
    let Some(Command::Take(args)) = cli.command else {
        panic!("expected take");
    };
    assert_eq!(
        args.answers,
        Some(vec!["0".to_string(), "1".to_string(), "Often".to_string()])
    );
    assert!(args.report);
}

#[test]
fn answers_and_answers_file_conflict() {
    let result = Cli::try_parse_from([
        "dass",
        "take",
        "--answers",
        "0",
        "--answers-file",
        "a.json",
    ]);
    assert!(result.is_err());
}

#[test]
fn config_subcommands_parse() {
    let cli = Cli::try_parse_from(["dass", "--config", "/tmp/c.json", "config", "init"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.json")));
    assert!(matches!(
        cli.command,
        Some(Command::Config {
            action: ConfigAction::Init
        })
    ));
}
