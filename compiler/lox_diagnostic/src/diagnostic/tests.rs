use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("Unterminated string!")
        .at_line(3)
        .with_note("add a closing `\"`");

    assert_eq!(diag.code, Some(ErrorCode::E0002));
    assert_eq!(diag.message, "Unterminated string!");
    assert_eq!(diag.line, Some(3));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_new_is_uncoded() {
    let diag = Diagnostic::new();
    assert_eq!(diag.code, None);
    assert_eq!(diag.line, None);
    assert!(diag.notes.is_empty());
}

#[test]
fn test_display_with_line_and_code() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("Unexpected character: `@`")
        .at_line(7);
    assert_eq!(
        diag.to_string(),
        "[line 7] error[E0001]: Unexpected character: `@`"
    );
}

#[test]
fn test_display_uncoded() {
    let diag = Diagnostic::new()
        .with_message("something broke")
        .at_line(1);
    assert_eq!(diag.to_string(), "[line 1] error: something broke");
}

#[test]
fn test_display_without_line() {
    let diag = Diagnostic::error(ErrorCode::E0004).with_message("bad number");
    assert_eq!(diag.to_string(), "error[E0004]: bad number");
}

#[test]
fn test_display_omits_notes() {
    let diag = Diagnostic::new()
        .with_message("oops")
        .with_note("try again");
    assert_eq!(diag.to_string(), "error: oops");
}
