//! Single-pass scanner producing [`Token`]s and [`LexError`]s.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] left to right with one
//! byte of lookahead. Each loop iteration recognizes exactly one token or
//! skips exactly one whitespace or comment region. Errors never stop the
//! scan: the offending input is skipped and recorded.
//!
//! # Lines
//!
//! `line` starts at 1 and increases once per `\n` consumed, including the
//! ones inside strings and block comments. Every token and error carries the
//! line on which its first character sits.

use lox_lexer_core::{char_class, Cursor, SourceBuffer, Span};
use tracing::{debug, trace};

use crate::{keywords, LexError, LexOutput, LexerConfig, Literal, Token, TokenKind};

/// Scanner state over one fully materialized source.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    config: LexerConfig,
    /// Byte offset of the first character of the token being recognized.
    start: u32,
    /// Line of the first character of the token being recognized.
    start_line: u32,
    line: u32,
    /// Full input length when the buffer holds only a prefix.
    truncated_from: Option<usize>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default configuration.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self::with_config(buffer, LexerConfig::default())
    }

    pub fn with_config(buffer: &'a SourceBuffer, config: LexerConfig) -> Self {
        Scanner {
            cursor: buffer.cursor(),
            config,
            start: 0,
            start_line: 1,
            line: 1,
            truncated_from: buffer.truncated_from(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole input.
    ///
    /// The returned token list always ends with exactly one `Eof` token.
    /// A source cut short by [`SourceBuffer`] gets a trailing
    /// `SourceTooLarge` error after the scanned prefix.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.cursor.source_len()))]
    pub fn scan_all(mut self) -> LexOutput {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.start_line = self.line;
            self.scan_token();
        }

        if let Some(len) = self.truncated_from {
            let scanned = self.cursor.source_len();
            self.error(LexError::source_too_large(scanned, len, self.line));
        }

        self.tokens.push(Token::eof(self.line, self.cursor.source_len()));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "scan complete"
        );

        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        match self.cursor.current() {
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b',' => self.single(TokenKind::Comma),
            b'.' => self.single(TokenKind::Dot),
            b'-' => self.single(TokenKind::Minus),
            b'+' => self.single(TokenKind::Plus),
            b';' => self.single(TokenKind::Semicolon),
            b'*' => self.single(TokenKind::Star),
            b'!' => self.with_equal(TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.with_equal(TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.with_equal(TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.with_equal(TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => self.slash_or_comment(),
            b' ' | b'\r' | b'\t' => self.whitespace(),
            b'\n' => self.newline(),
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b if char_class::is_alpha(b) => self.identifier(),
            _ => self.unexpected_character(),
        }
    }

    // ─── Emission ────────────────────────────────────────────────────

    fn span(&self) -> Span {
        Span::new(self.start, self.cursor.pos())
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.start);
        let token = Token::new(kind, lexeme, literal, self.start_line, self.span());
        self.tokens.push(token);
    }

    #[cold]
    fn error(&mut self, error: LexError) {
        trace!(line = error.line, %error, "lex error");
        self.errors.push(error);
    }

    // ─── Whitespace & Newlines ───────────────────────────────────────

    fn whitespace(&mut self) {
        self.cursor.eat_while(|b| matches!(b, b' ' | b'\r' | b'\t'));
    }

    fn newline(&mut self) {
        self.cursor.advance();
        self.line += 1;
    }

    // ─── Operators ───────────────────────────────────────────────────

    fn single(&mut self, kind: TokenKind) {
        self.cursor.advance();
        self.add_token(kind, None);
    }

    /// `!`, `=`, `<`, `>`: take a following `=` when there is one.
    fn with_equal(&mut self, two: TokenKind, one: TokenKind) {
        self.cursor.advance();
        let kind = if self.cursor.eat(b'=') { two } else { one };
        self.add_token(kind, None);
    }

    // ─── Comments ────────────────────────────────────────────────────

    fn slash_or_comment(&mut self) {
        self.cursor.advance(); // consume '/'
        if self.cursor.eat(b'/') {
            // Newline is left for the main loop to count.
            self.cursor.eat_until_newline_or_eof();
        } else if self.cursor.eat(b'*') {
            self.block_comment();
        } else {
            self.add_token(TokenKind::Slash, None);
        }
    }

    /// Skip a `/* ... */` comment. Comments do not nest.
    fn block_comment(&mut self) {
        let scan = self.cursor.skip_block_comment();
        self.line += scan.newlines;
        if !scan.terminated && self.config.report_unterminated_block_comments {
            self.error(LexError::unterminated_block_comment(
                self.start_line,
                self.span(),
            ));
        }
    }

    // ─── Literals ────────────────────────────────────────────────────

    /// String literal. No escapes; may span lines.
    fn string(&mut self) {
        self.cursor.advance(); // consume opening '"'
        let scan = self.cursor.skip_string_body();
        self.line += scan.newlines;

        if !scan.terminated {
            self.error(LexError::unterminated_string(self.start_line, self.span()));
            return;
        }

        let value = self.cursor.slice_from(self.start + 1).to_owned();
        self.cursor.advance(); // consume closing '"'
        self.add_token(TokenKind::String, Some(Literal::String(value)));
    }

    /// Number literal: digits, optionally `.` followed by at least one digit.
    fn number(&mut self) {
        self.cursor.eat_while(char_class::is_digit);
        if self.cursor.current() == b'.' && char_class::is_digit(self.cursor.peek()) {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(char_class::is_digit);
        }

        let text = self.cursor.slice_from(self.start);
        match text.parse::<f64>() {
            Ok(value) => self.add_token(TokenKind::Number, Some(Literal::Number(value))),
            Err(_) => {
                let error = LexError::malformed_number(text, self.start_line, self.span());
                self.error(error);
            }
        }
    }

    // ─── Identifiers ─────────────────────────────────────────────────

    /// Maximal identifier run, then keyword lookup.
    fn identifier(&mut self) {
        self.cursor.eat_while(char_class::is_alpha_numeric);
        let text = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }

    // ─── Errors ──────────────────────────────────────────────────────

    /// Skip one whole UTF-8 character that starts no token.
    fn unexpected_character(&mut self) {
        self.cursor.advance_char();
        let found = self
            .cursor
            .slice_from(self.start)
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.error(LexError::unexpected_character(
            found,
            self.start_line,
            self.span(),
        ));
    }
}
