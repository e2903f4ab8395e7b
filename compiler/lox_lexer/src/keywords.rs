//! Reserved-word resolution.
//!
//! Consulted only after the scanner has consumed a maximal identifier run,
//! so `forest` reaches this table whole and is never split into `for`+`est`.
//!
//! The table is a compile-time `match`: immutable, shared by every scanner,
//! no initialization or locking. The identifier's length is used as a
//! first-pass filter (keywords range from 2-6 chars), then the text is
//! matched against the keywords of that length.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the keyword's `TokenKind`, or `None` for an ordinary identifier.
/// Matching is exact and case-sensitive.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();

    // Guard: all keywords are 2-6 lowercase ASCII chars
    if !(2..=6).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

/// Every reserved word, in alphabetical order.
pub const KEYWORDS: &[&str] = &[
    "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "super",
    "this", "true", "var", "while",
];
