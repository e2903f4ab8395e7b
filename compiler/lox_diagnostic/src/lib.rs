//! Diagnostic system for Lox front-end errors.
//!
//! - Error codes for searchability (`lox --explain E0002`)
//! - Clear messages (what went wrong)
//! - Line number (where it went wrong)
//! - Notes (how to fix)
//!
//! Diagnostics are plain values. Rendering goes through a
//! [`DiagnosticEmitter`](emitter::DiagnosticEmitter); deciding whether to
//! stop after errors is the caller's business.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
