//! Lexer error types.
//!
//! Every lexical error is non-fatal: the scanner records a [`LexError`],
//! skips the offending input, and keeps going. Each error knows its line
//! (for `[line N]` reporting), its byte span, and its [`ErrorCode`].

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_lexer_core::Span;

/// A lexical error with its location.
///
/// `Display` yields the report message, e.g. `Unterminated string!`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// 1-based line where the offending input starts.
    pub line: u32,
    /// Byte range of the skipped input.
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token. Only that character is skipped.
    #[error("Unexpected character: `{found}`")]
    UnexpectedCharacter { found: char },
    /// End of input inside a string literal. The whole span is skipped.
    #[error("Unterminated string!")]
    UnterminatedString,
    /// End of input inside a `/* ... */` comment.
    #[error("Unterminated block comment!")]
    UnterminatedBlockComment,
    /// A number lexeme that `f64` parsing rejected.
    #[error("Malformed number literal `{text}`")]
    MalformedNumber { text: String },
    /// Input longer than 32-bit offsets can address. Only the first
    /// `scanned` bytes of the `len`-byte source were tokenized.
    #[error("Source too large: scanned {scanned} of {len} bytes")]
    SourceTooLarge { scanned: u32, len: usize },
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, span: Span) -> Self {
        LexError { kind, line, span }
    }

    #[cold]
    pub fn unexpected_character(found: char, line: u32, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter { found }, line, span)
    }

    #[cold]
    pub fn unterminated_string(line: u32, span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedString, line, span)
    }

    #[cold]
    pub fn unterminated_block_comment(line: u32, span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedBlockComment, line, span)
    }

    #[cold]
    pub fn malformed_number(text: impl Into<String>, line: u32, span: Span) -> Self {
        Self::new(
            LexErrorKind::MalformedNumber { text: text.into() },
            line,
            span,
        )
    }

    #[cold]
    pub fn source_too_large(scanned: u32, len: usize, line: u32) -> Self {
        Self::new(
            LexErrorKind::SourceTooLarge { scanned, len },
            line,
            Span::point(scanned),
        )
    }

    /// The diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0003,
            LexErrorKind::MalformedNumber { .. } => ErrorCode::E0004,
            LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0005,
        }
    }

    /// Convert into a renderable diagnostic with a fix hint.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .at_line(self.line);
        match &self.kind {
            LexErrorKind::UnexpectedCharacter { found } if !found.is_ascii() => {
                diag.with_note("identifiers may only use ASCII letters, digits and `_`")
            }
            LexErrorKind::UnexpectedCharacter { .. } => diag,
            LexErrorKind::UnterminatedString => {
                diag.with_note("add a closing `\"` to end the string")
            }
            LexErrorKind::UnterminatedBlockComment => {
                diag.with_note("add `*/` to close the comment")
            }
            LexErrorKind::MalformedNumber { .. } => {
                diag.with_note("number literals are digits with an optional `.` fraction")
            }
            LexErrorKind::SourceTooLarge { .. } => {
                diag.with_note("split the program into smaller files")
            }
        }
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        error.to_diagnostic()
    }
}
