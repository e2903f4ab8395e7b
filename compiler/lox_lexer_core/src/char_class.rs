//! ASCII character classes used by the scanner's dispatch.
//!
//! Identifiers are ASCII-only. Every predicate returns `false` for the
//! `0x00` sentinel, so `Cursor::eat_while` terminates at end of input.

/// `0`..=`9`.
#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// ASCII letter or underscore: the bytes that may start an identifier.
#[inline]
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Bytes that may continue an identifier.
#[inline]
pub const fn is_alpha_numeric(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte)
}
