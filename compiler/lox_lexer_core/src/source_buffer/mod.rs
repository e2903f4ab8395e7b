//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner reads `'\0'` at end of input instead of checking bounds.
//! The total size is rounded up to the next 64-byte boundary with at least
//! two zero bytes after the source, which keeps [`Cursor::peek`] valid even
//! when the cursor sits on the sentinel.
//!
//! The padding is stored as `'\0'` characters in a `String`, so every slice
//! of the buffer stays valid UTF-8 without unchecked conversions.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes after the source (sentinel + one peek byte).
const MIN_PADDING: usize = 2;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, padding_zeros...]
///  ^                ^           ^
///  0                |           rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned text: source followed by `'\0'` sentinel and padding.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Length of the input handed to the constructor, before truncation.
    input_len: usize,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes are cut at the last character
    /// boundary before `u32::MAX`; see [`truncated_from`](Self::truncated_from).
    pub fn new(source: &str) -> Self {
        Self::with_max_len(source, u32::MAX)
    }

    /// Like [`new`](Self::new), but keeps at most `max_len` bytes.
    pub fn with_max_len(source: &str, max_len: u32) -> Self {
        let input_len = source.len();
        let source = truncate_at(source, max_len as usize);
        let source_len = source.len();

        let padded_len = (source_len + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(max_len),
            input_len,
        }
    }

    /// The source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Full input length when the buffer holds only a prefix of it.
    pub fn truncated_from(&self) -> Option<usize> {
        (self.input_len > self.source_len as usize).then_some(self.input_len)
    }
}

/// Longest prefix of `source` no longer than `limit` that ends on a char boundary.
fn truncate_at(source: &str, limit: usize) -> &str {
    if source.len() <= limit {
        return source;
    }
    let mut end = limit;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}
