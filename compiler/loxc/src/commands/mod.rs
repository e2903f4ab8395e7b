//! Command handlers for the Lox CLI.
//!
//! Each submodule implements one command. Handlers return a process exit
//! code; only `main` calls `std::process::exit`. Shared utilities like
//! [`read_file`] and [`print_tokens`] live here in the module root.

use std::io::{self, Write};

use lox_lexer::{scan_all_with_sink, CountingSink, ErrorSink, LexerConfig, Token};

mod explain;
mod lex;
mod repl;
mod run;

pub use explain::explain_error;
pub use lex::{lex_file, write_token_dump};
pub use repl::{run_prompt, run_prompt_with};
pub use run::run_file;

/// Successful termination.
pub const EXIT_OK: i32 = 0;
/// Malformed command line.
pub const EXIT_USAGE: i32 = 64;
/// The input contained lexical errors.
pub const EXIT_DATA_ERR: i32 = 65;
/// A file could not be read.
pub const EXIT_IO_ERR: i32 = 74;

/// Why a source file could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Other {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read a source file, mapping I/O failures to user-facing messages.
pub fn read_file(path: &str) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound(path.to_string()),
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied(path.to_string()),
        io::ErrorKind::InvalidData => ReadError::InvalidUtf8(path.to_string()),
        _ => ReadError::Other {
            path: path.to_string(),
            source: e,
        },
    })
}

/// Scan one chunk of source, print its tokens to `out` one per line, and
/// report errors to `sink`.
///
/// Returns the number of errors reported.
pub fn scan_and_print<W: Write>(
    source: &str,
    config: &LexerConfig,
    out: &mut W,
    sink: &mut dyn ErrorSink,
) -> io::Result<usize> {
    let mut counting = CountingSink::new(sink);
    let tokens = scan_all_with_sink(source, config, &mut counting);
    print_tokens(&tokens, out)?;
    Ok(counting.count())
}

/// Print tokens in `KIND lexeme literal` form, one per line.
pub fn print_tokens<W: Write>(tokens: &[Token], out: &mut W) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

fn stderr_is_tty() -> bool {
    io::IsTerminal::is_terminal(&io::stderr())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
