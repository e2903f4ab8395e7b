//! Lox CLI
//!
//! Scans Lox scripts and prints their tokens.

use loxc::commands::{explain_error, lex_file, run_file, run_prompt, EXIT_OK, EXIT_USAGE};
use loxc::config::usage;
use loxc::{init_tracing, CliConfig, Command};

fn main() {
    init_tracing();

    let config = match CliConfig::parse(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{}", usage());
            std::process::exit(EXIT_USAGE);
        }
    };

    let code = match &config.command {
        Command::Repl => run_prompt(&config),
        Command::Run { path } => run_file(path, &config),
        Command::Lex { path } => lex_file(path, &config),
        Command::Explain { code } => explain_error(code),
        Command::Help => {
            println!("{}", usage());
            EXIT_OK
        }
        Command::Version => {
            println!("Lox lexer {}", env!("CARGO_PKG_VERSION"));
            EXIT_OK
        }
    };
    std::process::exit(code);
}
