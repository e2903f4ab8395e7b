//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! reached when the position reaches the source length; reads at or past
//! that point return the `0x00` sentinel. Lookahead never moves the cursor.
//!
//! # Interior Null Bytes
//!
//! A null byte at `pos < source_len` is source content (the scanner reports
//! it as an unexpected character); only `pos >= source_len` is EOF.

/// Outcome of skipping the body of a delimited construct (string or block comment).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelimitedScan {
    /// Number of `\n` bytes crossed.
    pub newlines: u32,
    /// Whether the closing delimiter was found before end of input.
    pub terminated: bool,
}

/// Cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is just a copy.
///
/// # Invariant
///
/// `buf` holds the source followed by at least two `'\0'` bytes. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source + sentinel + padding.
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 1 < buf.len(),
            "sentinel and peek byte must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Returns the byte one position ahead of current, `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(!self.is_eof(), "advance past end of input");
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(self.pos + n <= self.source_len, "advance past end of input");
        self.pos += n;
    }

    /// Consume the current byte if it equals `expected`.
    ///
    /// Returns `true` and advances only on an exact match. Never advances on
    /// mismatch or at end of input.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.is_eof() || self.current() != expected {
            return false;
        }
        self.pos += 1;
        true
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on character
    /// boundaries. The scanner only slices at token boundaries, which always
    /// sit between whole characters.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop. All
    /// predicates in [`char_class`](crate::char_class) satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Remaining source bytes from the current position (no sentinel).
    fn remaining(&self) -> &'a [u8] {
        &self.buf.as_bytes()[self.pos as usize..self.source_len as usize]
    }

    /// Advance to the next `\n` byte or EOF. The newline is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Skip string content up to (not including) the closing `"`.
    ///
    /// Counts newlines crossed. If no quote remains, the cursor ends at EOF
    /// and the scan is reported as unterminated.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_string_body(&mut self) -> DelimitedScan {
        let remaining = self.remaining();
        let (body_len, terminated) = match memchr::memchr(b'"', remaining) {
            Some(offset) => (offset, true),
            None => (remaining.len(), false),
        };
        let newlines = count_newlines(&remaining[..body_len]);
        self.pos += body_len as u32;
        DelimitedScan {
            newlines,
            terminated,
        }
    }

    /// Skip a block comment body and its `*/` terminator.
    ///
    /// The cursor must sit just after the opening `/*`. On success the
    /// terminator is consumed; otherwise the cursor ends at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_block_comment(&mut self) -> DelimitedScan {
        let remaining = self.remaining();
        match memchr::memmem::find(remaining, b"*/") {
            Some(offset) => {
                let newlines = count_newlines(&remaining[..offset]);
                self.pos += offset as u32 + 2;
                DelimitedScan {
                    newlines,
                    terminated: true,
                }
            }
            None => {
                let newlines = count_newlines(remaining);
                self.pos = self.source_len;
                DelimitedScan {
                    newlines,
                    terminated: false,
                }
            }
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "bytes come from a source whose length fits in u32"
)]
fn count_newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}
