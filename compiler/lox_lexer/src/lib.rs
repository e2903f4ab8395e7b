//! Lexer for Lox.
//!
//! Turns source text into a flat `Vec<Token>` ending in one `Eof` token,
//! plus every lexical error found along the way.
//!
//! # Architecture
//!
//! ```text
//! &str ──► SourceBuffer ──► Cursor ──► Scanner ──► LexOutput { tokens, errors }
//!                                                        │
//!                                                        └──► ErrorSink (optional)
//! ```
//!
//! Byte-level primitives live in `lox_lexer_core`; this crate owns token
//! classification, literal decoding and keyword resolution.

pub mod keywords;
mod lex_error;
mod scanner;
mod sink;
mod token;

use lox_diagnostic::Diagnostic;
use lox_lexer_core::SourceBuffer;

pub use lex_error::{LexError, LexErrorKind};
pub use lox_lexer_core::Span;
pub use scanner::Scanner;
pub use sink::{CountingSink, ErrorSink};
pub use token::{Literal, Token, TokenKind};

/// Lexer behavior switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Report a block comment still open at end of input. When `false` the
    /// comment silently runs to the end of the source.
    pub report_unterminated_block_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            report_unterminated_block_comments: true,
        }
    }
}

/// Result of scanning one source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    /// Recognized tokens. The last one is always `Eof`.
    pub tokens: Vec<Token>,
    /// Lexical errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors as renderable diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(LexError::to_diagnostic).collect()
    }
}

/// Scan `source` with the default configuration.
pub fn scan_all(source: &str) -> LexOutput {
    scan_all_with_config(source, &LexerConfig::default())
}

pub fn scan_all_with_config(source: &str, config: &LexerConfig) -> LexOutput {
    let buffer = SourceBuffer::new(source);
    Scanner::with_config(&buffer, *config).scan_all()
}

/// Scan `source`, reporting every error to `sink` in source order.
///
/// The sink never interrupts scanning; the full token list is returned.
pub fn scan_all_with_sink(
    source: &str,
    config: &LexerConfig,
    sink: &mut dyn ErrorSink,
) -> Vec<Token> {
    let output = scan_all_with_config(source, config);
    for error in &output.errors {
        sink.report_error(error);
    }
    output.tokens
}
