//! Error sinks: where the scanner's reports go.
//!
//! A sink receives `(line, message)` pairs and never stops the scan. The
//! caller owns the decision to halt, typically by checking
//! [`LexOutput::has_errors`](crate::LexOutput::has_errors) or its own
//! counter before moving on to parsing.

use std::io::Write;

use lox_diagnostic::{Diagnostic, DiagnosticEmitter, TerminalEmitter};

use crate::LexError;

/// Receiver for lexical error reports.
pub trait ErrorSink {
    /// Record one error at a 1-based line.
    fn report(&mut self, line: u32, message: &str);

    /// Record a structured error. Defaults to [`report`](Self::report) with
    /// the error's message.
    fn report_error(&mut self, error: &LexError) {
        self.report(error.line, &error.to_string());
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report(&mut self, line: u32, message: &str) {
        (**self).report(line, message);
    }

    fn report_error(&mut self, error: &LexError) {
        (**self).report_error(error);
    }
}

/// Collects reports in order.
impl ErrorSink for Vec<(u32, String)> {
    fn report(&mut self, line: u32, message: &str) {
        self.push((line, message.to_owned()));
    }
}

/// Renders each report immediately.
impl<W: Write> ErrorSink for TerminalEmitter<W> {
    fn report(&mut self, line: u32, message: &str) {
        let diag = Diagnostic::new()
            .with_message(message)
            .at_line(line);
        self.emit(&diag);
    }

    fn report_error(&mut self, error: &LexError) {
        self.emit(&error.to_diagnostic());
    }
}

/// Wraps another sink and counts what passes through.
pub struct CountingSink<S> {
    inner: S,
    count: usize,
}

impl<S: ErrorSink> CountingSink<S> {
    pub fn new(inner: S) -> Self {
        CountingSink { inner, count: 0 }
    }

    /// Number of errors reported so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<S: ErrorSink> ErrorSink for CountingSink<S> {
    fn report(&mut self, line: u32, message: &str) {
        self.count += 1;
        self.inner.report(line, message);
    }

    fn report_error(&mut self, error: &LexError) {
        self.count += 1;
        self.inner.report_error(error);
    }
}
