use crate::cli::{Cli, Command};

use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_send_with_globals_when_parsed_then_fields_populated() {
    let cli = Cli::try_parse_from([
        "parley",
        "--config-dir",
        "/tmp/parley",
        "send",
        "mt-bob",
        "hello there",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/parley")));
    assert!(cli.verbose);
    assert_eq!(
        cli.command,
        Command::Send {
            recipient: String::from("mt-bob"),
            message: String::from("hello there"),
        }
    );
}

#[test]
fn given_no_command_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["parley"]).is_err());
}

#[test]
fn given_login_missing_password_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["parley", "login", "alice"]).is_err());
}
