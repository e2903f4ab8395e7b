//! Command-line configuration.
//!
//! Arguments are parsed by hand in the order given:
//!
//! ```text
//! lox [--color=auto|always|never] [--allow-unterminated-comments] [script]
//! lox lex <file>
//! lox --explain <CODE>
//! lox --help
//! ```
//!
//! Options may appear anywhere before `--`. With no positional argument the
//! driver starts the interactive prompt. `lex` is the only word treated as a
//! subcommand; `lox -- lex` runs a script named `lex`.

use lox_diagnostic::ColorMode;
use lox_lexer::LexerConfig;

/// What the driver should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive prompt.
    Repl,
    /// Scan a script and print its tokens.
    Run { path: String },
    /// Print a detailed token dump for a file.
    Lex { path: String },
    /// Print the documentation for an error code.
    Explain { code: String },
    Help,
    Version,
}

/// Fully parsed driver configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub color: ColorMode,
    pub lexer: LexerConfig,
}

/// Malformed command line. Reported with usage text, exit code 64.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid color mode '{0}' (expected auto, always or never)")]
    InvalidColorMode(String),
    #[error("missing {what} for '{command}'")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            command: Command::Repl,
            color: ColorMode::Auto,
            lexer: LexerConfig::default(),
        }
    }
}

impl CliConfig {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = CliConfig::default();
        let mut positional: Vec<String> = Vec::new();
        // Index into `positional` where `--` was seen.
        let mut literal_from: Option<usize> = None;
        let mut explain: Option<String> = None;
        let mut help = false;
        let mut version = false;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            if literal_from.is_some() {
                positional.push(arg);
            } else if arg == "--" {
                literal_from = Some(positional.len());
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                config.color = ColorMode::parse(mode)
                    .ok_or_else(|| UsageError::InvalidColorMode(mode.to_string()))?;
            } else if arg == "--allow-unterminated-comments" {
                config.lexer.report_unterminated_block_comments = false;
            } else if arg == "--help" || arg == "-h" {
                help = true;
            } else if arg == "--version" || arg == "-V" {
                version = true;
            } else if arg == "--explain" {
                let code = args.next().ok_or(UsageError::MissingArgument {
                    command: "--explain",
                    what: "error code",
                })?;
                explain = Some(code);
            } else if arg.starts_with('-') && arg != "-" {
                return Err(UsageError::UnknownOption(arg));
            } else {
                positional.push(arg);
            }
        }

        config.command = if help {
            Command::Help
        } else if version {
            Command::Version
        } else if let Some(code) = explain {
            match positional.into_iter().next() {
                Some(extra) => return Err(UsageError::UnexpectedArgument(extra)),
                None => Command::Explain { code },
            }
        } else {
            command_from_positional(positional, literal_from == Some(0))?
        };
        Ok(config)
    }
}

/// `literal` means the first positional followed `--` and is always a script.
fn command_from_positional(positional: Vec<String>, literal: bool) -> Result<Command, UsageError> {
    let mut args = positional.into_iter();
    let Some(first) = args.next() else {
        return Ok(Command::Repl);
    };

    let command = if first == "lex" && !literal {
        Command::Lex {
            path: args.next().ok_or(UsageError::MissingArgument {
                command: "lex",
                what: "file path",
            })?,
        }
    } else {
        Command::Run { path: first }
    };

    match args.next() {
        Some(extra) => Err(UsageError::UnexpectedArgument(extra)),
        None => Ok(command),
    }
}

/// Usage text for `--help` and usage errors.
pub fn usage() -> &'static str {
    "\
Lox lexer

Usage: lox [options] [--] [script]

Commands:
  <script>             Scan a script and print its tokens
  (none)               Start an interactive prompt
  lex <file>           Print tokens with lines and byte spans
  --explain <code>     Explain an error code (e.g., E0002)
  --help               Show this help message
  --version            Show version information

  `lex` is reserved as a subcommand. Put `--` before a script named
  `lex` or one starting with `-`: lox -- lex

Options:
  --color=<mode>                  auto (default), always, never
  --allow-unterminated-comments   Do not report a block comment left open at end of input

Logging:
  RUST_LOG=lox_lexer=debug lox script.lox"
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
