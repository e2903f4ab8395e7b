use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<CliConfig, UsageError> {
    CliConfig::parse(args.iter().copied())
}

fn command(args: &[&str]) -> Command {
    parse(args).unwrap().command
}

#[test]
fn no_arguments_starts_prompt() {
    assert_eq!(parse(&[]).unwrap(), CliConfig::default());
    assert_eq!(command(&[]), Command::Repl);
}

#[test]
fn single_path_runs_script() {
    assert_eq!(
        command(&["hello.lox"]),
        Command::Run {
            path: "hello.lox".to_string()
        }
    );
}

#[test]
fn lex_subcommand() {
    assert_eq!(
        command(&["lex", "a.lox"]),
        Command::Lex {
            path: "a.lox".to_string()
        }
    );
}

#[test]
fn lex_requires_path() {
    assert_eq!(
        parse(&["lex"]),
        Err(UsageError::MissingArgument {
            command: "lex",
            what: "file path"
        })
    );
}

#[test]
fn explain_flag_takes_next_argument() {
    let expected = Command::Explain {
        code: "E0002".to_string(),
    };
    assert_eq!(command(&["--explain", "E0002"]), expected);
    assert_eq!(command(&["--color=never", "--explain", "E0002"]), expected);
    // The code is taken verbatim, even if it looks like an option.
    assert_eq!(
        command(&["--explain", "--help"]),
        Command::Explain {
            code: "--help".to_string()
        }
    );
}

#[test]
fn explain_rejects_extra_positional() {
    assert_eq!(
        parse(&["--explain", "E0001", "a.lox"]),
        Err(UsageError::UnexpectedArgument("a.lox".to_string()))
    );
}

#[test]
fn explain_and_help_words_are_scripts() {
    assert_eq!(
        parse(&["explain", "E0002"]),
        Err(UsageError::UnexpectedArgument("E0002".to_string()))
    );
    assert_eq!(
        command(&["explain"]),
        Command::Run {
            path: "explain".to_string()
        }
    );
    assert_eq!(
        command(&["help"]),
        Command::Run {
            path: "help".to_string()
        }
    );
}

#[test]
fn double_dash_makes_lex_a_script() {
    assert_eq!(
        command(&["--", "lex"]),
        Command::Run {
            path: "lex".to_string()
        }
    );
    assert_eq!(
        command(&["--", "--help"]),
        Command::Run {
            path: "--help".to_string()
        }
    );
    assert_eq!(
        command(&["lex", "--", "-odd.lox"]),
        Command::Lex {
            path: "-odd.lox".to_string()
        }
    );
}

#[test]
fn explain_requires_code() {
    assert!(matches!(
        parse(&["--explain"]),
        Err(UsageError::MissingArgument { what: "error code", .. })
    ));
}

#[test]
fn help_wins_over_everything() {
    assert_eq!(command(&["a.lox", "--help"]), Command::Help);
    assert_eq!(command(&["-h"]), Command::Help);
}

#[test]
fn version_flag() {
    assert_eq!(command(&["--version"]), Command::Version);
}

#[test]
fn too_many_scripts() {
    assert_eq!(
        parse(&["a.lox", "b.lox"]),
        Err(UsageError::UnexpectedArgument("b.lox".to_string()))
    );
}

#[test]
fn color_modes() {
    assert_eq!(parse(&["--color=never"]).unwrap().color, ColorMode::Never);
    assert_eq!(
        parse(&["--color=always", "a.lox"]).unwrap().color,
        ColorMode::Always
    );
    assert_eq!(parse(&[]).unwrap().color, ColorMode::Auto);
}

#[test]
fn invalid_color_mode() {
    let err = parse(&["--color=rainbow"]).unwrap_err();
    assert_eq!(err, UsageError::InvalidColorMode("rainbow".to_string()));
    assert_eq!(
        err.to_string(),
        "invalid color mode 'rainbow' (expected auto, always or never)"
    );
}

#[test]
fn allow_unterminated_comments_flag() {
    let config = parse(&["--allow-unterminated-comments", "a.lox"]).unwrap();
    assert!(!config.lexer.report_unterminated_block_comments);
    assert!(parse(&["a.lox"]).unwrap().lexer.report_unterminated_block_comments);
}

#[test]
fn unknown_option() {
    assert_eq!(
        parse(&["--fast"]),
        Err(UsageError::UnknownOption("--fast".to_string()))
    );
}

#[test]
fn options_after_path() {
    let config = parse(&["a.lox", "--color=never"]).unwrap();
    assert_eq!(
        config.command,
        Command::Run {
            path: "a.lox".to_string()
        }
    );
    assert_eq!(config.color, ColorMode::Never);
}

#[test]
fn usage_mentions_every_command() {
    let text = usage();
    for needle in [
        "lex <file>",
        "--explain",
        "--color",
        "--allow-unterminated-comments",
        "lox -- lex",
    ] {
        assert!(text.contains(needle), "usage is missing {needle}");
    }
}
