//! Interactive prompt.
//!
//! Each line is scanned on its own. Errors on one line never affect the next
//! and never end the session; an empty line or end of input does.

use std::io::{self, BufRead, Write};

use lox_diagnostic::{DiagnosticEmitter, TerminalEmitter};

use crate::CliConfig;

use super::{scan_and_print, stderr_is_tty, EXIT_IO_ERR, EXIT_OK};

const PROMPT: &str = "> ";

/// Run the prompt on stdin/stdout with errors on stderr.
pub fn run_prompt(config: &CliConfig) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut emitter = TerminalEmitter::stderr(config.color, stderr_is_tty());
    match run_prompt_with(stdin.lock(), stdout.lock(), &mut emitter, config) {
        Ok(()) => EXIT_OK,
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_IO_ERR
        }
    }
}

/// Prompt loop over arbitrary input and output.
pub fn run_prompt_with<R, W, E>(
    input: R,
    mut out: W,
    emitter: &mut E,
    config: &CliConfig,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: DiagnosticEmitter + lox_lexer::ErrorSink,
{
    let mut lines = input.lines();
    loop {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.is_empty() {
            break;
        }

        scan_and_print(&line, &config.lexer, &mut out, emitter)?;
        emitter.flush();
    }
    // Leave the terminal on a fresh line after the last prompt.
    writeln!(out)?;
    Ok(())
}
