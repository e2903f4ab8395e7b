//! Core diagnostic type for structured error reporting.
//!
//! Every lexical problem is an error: there are no warnings to downgrade
//! to, so a [`Diagnostic`] carries no severity.

use std::fmt;

use crate::ErrorCode;

/// A diagnostic with the context needed to render it.
///
/// `code` is absent for messages that arrive through a plain
/// `(line, message)` channel and carry no classification.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: Option<ErrorCode>,
    /// Main error message.
    pub message: String,
    /// 1-based source line the diagnostic points at.
    pub line: Option<u32>,
    /// Additional notes providing context or a fix.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an uncoded error diagnostic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code: Some(code),
            ..Self::default()
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the 1-based line number.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Plain single-line form: `[line N] error[E0002]: message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "[line {line}] ")?;
        }
        f.write_str("error")?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests;
