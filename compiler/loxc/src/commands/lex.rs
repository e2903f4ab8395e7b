//! The `lex` debug command: detailed token dump.

use std::io::{self, Write};

use lox_diagnostic::{DiagnosticEmitter, TerminalEmitter};
use lox_lexer::{scan_all_with_config, LexOutput};

use crate::CliConfig;

use super::{read_file, stderr_is_tty, EXIT_DATA_ERR, EXIT_IO_ERR, EXIT_OK};

/// Lex a file and display the token stream with lines and spans.
pub fn lex_file(path: &str, config: &CliConfig) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_IO_ERR;
        }
    };

    let output = scan_all_with_config(&source, &config.lexer);

    let stdout = io::stdout();
    if let Err(e) = write_token_dump(path, &output, &mut stdout.lock()) {
        eprintln!("error: cannot write tokens: {e}");
        return EXIT_IO_ERR;
    }

    let mut emitter = TerminalEmitter::stderr(config.color, stderr_is_tty());
    emitter.emit_all(&output.diagnostics());
    emitter.emit_summary(output.errors.len());
    emitter.flush();

    if output.has_errors() {
        EXIT_DATA_ERR
    } else {
        EXIT_OK
    }
}

/// Write the `lex` dump: a header, then one line per token.
pub fn write_token_dump<W: Write>(path: &str, output: &LexOutput, out: &mut W) -> io::Result<()> {
    writeln!(out, "Tokens for '{path}' ({} tokens):", output.tokens.len())?;
    for token in &output.tokens {
        write!(
            out,
            "  {} {:?} line {} @ {}",
            token.kind(),
            token.lexeme(),
            token.line(),
            token.span()
        )?;
        match token.literal() {
            Some(literal) => writeln!(out, " = {literal}")?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}
