use std::io::Write as _;

use lox_diagnostic::{ColorMode, TerminalEmitter};
use lox_lexer::{scan_all, LexerConfig};
use pretty_assertions::assert_eq;

use super::explain::write_explanation;
use super::*;
use crate::CliConfig;

fn plain_emitter() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

fn script(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// === read_file ===

#[test]
fn read_file_missing() {
    let err = read_file("/definitely/not/here.lox").unwrap_err();
    assert!(matches!(err, ReadError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        "cannot find file '/definitely/not/here.lox'"
    );
}

#[test]
fn read_file_invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x66, 0xFF, 0xFE]).unwrap();
    let path = file.path().to_str().unwrap();
    assert!(matches!(read_file(path), Err(ReadError::InvalidUtf8(_))));
}

#[test]
fn read_file_contents() {
    let file = script("print 1;");
    let path = file.path().to_str().unwrap();
    assert_eq!(read_file(path).unwrap(), "print 1;");
}

// === scan_and_print ===

#[test]
fn prints_one_token_per_line() {
    let mut out = Vec::new();
    let mut sink: Vec<(u32, String)> = Vec::new();
    let count = scan_and_print("x = 1;", &LexerConfig::default(), &mut out, &mut sink).unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "IDENTIFIER x null\nEQUAL = null\nNUMBER 1 1\nSEMICOLON ; null\nEOF  null\n"
    );
}

#[test]
fn counts_reported_errors() {
    let mut out = Vec::new();
    let mut sink: Vec<(u32, String)> = Vec::new();
    let count = scan_and_print("@ #\n\"x", &LexerConfig::default(), &mut out, &mut sink).unwrap();
    assert_eq!(count, 3);
    assert_eq!(sink.len(), 3);
    assert_eq!(String::from_utf8(out).unwrap(), "EOF  null\n");
}

#[test]
fn print_tokens_matches_display() {
    let output = scan_all("\"hi\"");
    let mut out = Vec::new();
    print_tokens(&output.tokens, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "STRING \"hi\" hi\nEOF  null\n");
}

// === run_file ===

#[test]
fn run_file_exit_codes() {
    let config = CliConfig::default();
    assert_eq!(run_file(script("var a = 1;").path().to_str().unwrap(), &config), EXIT_OK);
    assert_eq!(
        run_file(script("var a = @;").path().to_str().unwrap(), &config),
        EXIT_DATA_ERR
    );
    assert_eq!(run_file("/no/such/script.lox", &config), EXIT_IO_ERR);
}

#[test]
fn run_file_respects_comment_flag() {
    let config = CliConfig::parse(["--allow-unterminated-comments"]).unwrap();
    let file = script("print 1; /* unfinished");
    assert_eq!(run_file(file.path().to_str().unwrap(), &config), EXIT_OK);
    assert_eq!(
        run_file(file.path().to_str().unwrap(), &CliConfig::default()),
        EXIT_DATA_ERR
    );
}

// === REPL ===

#[test]
fn prompt_scans_each_line_until_empty() {
    let input = "var x;\n@\n\nprint 1;\n";
    let mut out = Vec::new();
    let mut emitter = plain_emitter();
    run_prompt_with(input.as_bytes(), &mut out, &mut emitter, &CliConfig::default()).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "> VAR var null\nIDENTIFIER x null\nSEMICOLON ; null\nEOF  null\n> EOF  null\n> \n"
    );
    assert_eq!(
        String::from_utf8(emitter.into_inner()).unwrap(),
        "[line 1] error[E0001]: Unexpected character: `@`\n"
    );
}

#[test]
fn prompt_errors_do_not_end_session() {
    let input = "\"open\nok\n";
    let mut out = Vec::new();
    let mut emitter = plain_emitter();
    run_prompt_with(input.as_bytes(), &mut out, &mut emitter, &CliConfig::default()).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("IDENTIFIER ok null"));
    // Each line restarts at line 1.
    let errors = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(errors.starts_with("[line 1] error[E0002]: Unterminated string!"));
}

#[test]
fn prompt_ends_at_end_of_input() {
    let mut out = Vec::new();
    let mut emitter = plain_emitter();
    run_prompt_with(&b""[..], &mut out, &mut emitter, &CliConfig::default()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "> \n");
}

// === lex dump ===

#[test]
fn token_dump_format() {
    let output = scan_all("x\n= 2.5");
    let mut out = Vec::new();
    write_token_dump("t.lox", &output, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Tokens for 't.lox' (4 tokens):\n  \
         IDENTIFIER \"x\" line 1 @ 0..1\n  \
         EQUAL \"=\" line 2 @ 2..3\n  \
         NUMBER \"2.5\" line 2 @ 4..7 = 2.5\n  \
         EOF \"\" line 2 @ 7..7\n"
    );
}

#[test]
fn lex_file_exit_codes() {
    let config = CliConfig::default();
    assert_eq!(lex_file(script("a + b").path().to_str().unwrap(), &config), EXIT_OK);
    assert_eq!(
        lex_file(script("\"open").path().to_str().unwrap(), &config),
        EXIT_DATA_ERR
    );
    assert_eq!(lex_file("/no/such/file.lox", &config), EXIT_IO_ERR);
}

// === explain ===

#[test]
fn explain_known_code() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = write_explanation("e0002", &mut out, &mut err);
    assert_eq!(code, EXIT_OK);
    assert!(String::from_utf8(out)
        .unwrap()
        .starts_with("# E0002: Unterminated String"));
    assert!(err.is_empty());
}

#[test]
fn explain_unknown_code() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = write_explanation("E9999", &mut out, &mut err);
    assert_eq!(code, EXIT_USAGE);
    assert!(out.is_empty());
    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("Unknown error code: E9999"));
    assert!(err.contains("E0001, E0002, E0003, E0004, E0005"));
}
