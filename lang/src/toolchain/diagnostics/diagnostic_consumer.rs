use std::fmt;
use std::io::Write;

use tracing::warn;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Note,
    Warning,
    Error,
}

/// A location in RPSL source referred to by the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticLocation<'s> {
    pub file_name: &'s str,
    pub line_number: i32,
    pub column_number: i32,

    /// The full text of the line, without its line terminator.
    pub line: &'s str,
}

impl<'s> fmt::Display for DiagnosticLocation<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name)?;
        if self.line_number > 0 {
            f.write_fmt(format_args!(":{}", self.line_number))?;
        }
        if self.column_number > 0 {
            f.write_fmt(format_args!(":{}", self.column_number))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage<'s> {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation<'s>,
    pub body: String,
}

impl<'s> fmt::Display for DiagnosticMessage<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The alternate flag marks the message as the error line of its diagnostic.
        let infix = if f.alternate() { "ERROR: " } else { "" };
        f.write_fmt(format_args!("{}: {}{}", self.location, infix, self.body))
    }
}

/// A complete Diagnostic, including a main message and optional notes, plus the level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'s> {
    pub level: DiagnosticLevel,
    pub message: DiagnosticMessage<'s>,
    pub notes: Vec<DiagnosticMessage<'s>>,
}

impl<'s> Diagnostic<'s> {
    pub fn new(
        level: DiagnosticLevel,
        message: DiagnosticMessage<'s>,
        notes: Vec<DiagnosticMessage<'s>>,
    ) -> Diagnostic<'s> {
        Diagnostic { level, message, notes }
    }
}

impl<'s> fmt::Display for Diagnostic<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level == DiagnosticLevel::Error {
            f.write_fmt(format_args!("{:#}", self.message))?;
        } else {
            f.write_fmt(format_args!("{}", self.message))?;
        }
        for m in &self.notes {
            f.write_fmt(format_args!("\n  {}", m))?;
        }
        Ok(())
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: &Diagnostic);
    fn flush(&mut self);
}

/// Maps some domain-specific position, a token index for example, back to a source location.
pub trait DiagnosticLocationTranslator<'s, LocationT> {
    fn get_location(&self, loc: LocationT) -> DiagnosticLocation<'s>;
}

/// Discards every diagnostic.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: &Diagnostic) {}
    fn flush(&mut self) {}
}

/// Writes each diagnostic as a line of text to a buffered stream.
pub struct StreamDiagnosticConsumer<W: Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }

    /// Flushes any buffered diagnostics and returns the underlying stream.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.stream.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        if let Err(e) = writeln!(self.stream, "{}", diag) {
            warn!(error = %e, "unable to write diagnostic");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.stream.flush() {
            warn!(error = %e, "unable to flush diagnostics");
        }
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<impl Write> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}
