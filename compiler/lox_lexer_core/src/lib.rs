//! Low-level building blocks for the Lox scanner.
//!
//! This crate owns the byte-level view of the source: a sentinel-terminated
//! [`SourceBuffer`], a [`Cursor`] with one- and two-byte lookahead, the
//! [`Span`] type used to locate tokens, and the ASCII character classes the
//! scanner dispatches on. It knows nothing about tokens or keywords.

pub mod char_class;
mod cursor;
mod source_buffer;
mod span;

pub use cursor::{Cursor, DelimitedScan};
pub use source_buffer::SourceBuffer;
pub use span::Span;
