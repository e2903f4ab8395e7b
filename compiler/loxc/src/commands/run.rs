//! The `run` command: scan a script and print its tokens.

use std::io::{self, Write};

use lox_diagnostic::{DiagnosticEmitter, TerminalEmitter};
use tracing::debug;

use crate::CliConfig;

use super::{read_file, scan_and_print, stderr_is_tty, EXIT_DATA_ERR, EXIT_IO_ERR, EXIT_OK};

/// Scan a script file.
///
/// Tokens go to stdout and errors to stderr. Every error in the file is
/// reported before deciding the exit code, so the user sees all of them.
pub fn run_file(path: &str, config: &CliConfig) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_IO_ERR;
        }
    };
    debug!(path, bytes = source.len(), "read script");

    let mut emitter = TerminalEmitter::stderr(config.color, stderr_is_tty());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let error_count = match scan_and_print(&source, &config.lexer, &mut out, &mut emitter) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("error: cannot write tokens: {e}");
            return EXIT_IO_ERR;
        }
    };
    let _ = out.flush();

    emitter.emit_summary(error_count);
    emitter.flush();

    if error_count > 0 {
        EXIT_DATA_ERR
    } else {
        EXIT_OK
    }
}
