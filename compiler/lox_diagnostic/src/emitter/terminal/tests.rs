use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message("Unterminated string!")
        .at_line(4)
        .with_note("add a closing `\"` to end the string")
}

fn render(mode: ColorMode, f: impl FnOnce(&mut TerminalEmitter<Vec<u8>>)) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(ColorMode::Never, |e| e.emit(&sample_diagnostic()));
    assert_eq!(
        text,
        "[line 4] error[E0002]: Unterminated string!\n  = help: add a closing `\"` to end the string\n"
    );
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0002"));
    assert!(text.contains("Unterminated string!"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_uncoded_diagnostic_has_no_brackets() {
    let diag = Diagnostic::new()
        .with_message("Unexpected character: `#`")
        .at_line(2);
    let text = render(ColorMode::Never, |e| e.emit(&diag));
    assert_eq!(text, "[line 2] error: Unexpected character: `#`\n");
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E0001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E0002).with_message("error 2"),
    ];
    let text = render(ColorMode::Never, |e| e.emit_all(&diagnostics));
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_summary_singular_error() {
    let text = render(ColorMode::Never, |e| e.emit_summary(1));
    assert_eq!(text, "error: aborting due to previous error\n");
}

#[test]
fn test_summary_plural_errors() {
    let text = render(ColorMode::Never, |e| e.emit_summary(3));
    assert_eq!(text, "error: aborting due to 3 previous errors\n");
}

#[test]
fn test_summary_colors_only_the_label() {
    let text = render(ColorMode::Always, |e| e.emit_summary(2));
    assert_eq!(
        text,
        "\x1b[1;31merror\x1b[0m: aborting due to 2 previous errors\n"
    );
}

#[test]
fn test_summary_nothing() {
    let text = render(ColorMode::Never, |e| e.emit_summary(0));
    assert!(text.is_empty());
}
