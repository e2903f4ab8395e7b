//! The `explain` command: display documentation for error codes.

use std::io::{self, Write};

use lox_diagnostic::{ErrorCode, ErrorDocs};

use super::{EXIT_OK, EXIT_USAGE};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_explanation(code_str, &mut stdout.lock(), &mut stderr.lock())
}

pub(super) fn write_explanation<W: Write, E: Write>(
    code_str: &str,
    out: &mut W,
    err: &mut E,
) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(err, "Unknown error code: {code_str}");
        let _ = writeln!(err);
        let _ = writeln!(err, "Codes have the format EXXXX where X is a digit.");
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        let _ = writeln!(err, "Known codes: {}", known.join(", "));
        return EXIT_USAGE;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = writeln!(out, "{doc}");
        EXIT_OK
    } else {
        let _ = writeln!(err, "No documentation available for {code}");
        let _ = writeln!(err, "{code}: {}", code.description());
        EXIT_OK
    }
}
