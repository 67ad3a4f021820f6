//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! Toolchain code reports problems as structured [Diagnostic] values delivered to a
//! [DiagnosticConsumer], which decides how to present them to the user. The lexer reports every
//! illegal token this way, alongside the [crate::toolchain::lexer::token::TokenKind::Illegal]
//! token itself. Consumers of a finished token stream can locate any token for their own
//! diagnostics through a [DiagnosticLocationTranslator].
//!

pub mod diagnostic_consumer;
pub mod diagnostic_kind;

#[cfg(test)]
mod diagnostic_consumer_unittests;

pub use diagnostic_consumer::Diagnostic;
pub use diagnostic_consumer::DiagnosticConsumer;
pub use diagnostic_consumer::DiagnosticLevel;
pub use diagnostic_consumer::DiagnosticLocation;
pub use diagnostic_consumer::DiagnosticLocationTranslator;
pub use diagnostic_consumer::DiagnosticMessage;
pub use diagnostic_consumer::NullDiagnosticConsumer;
pub use diagnostic_consumer::StreamDiagnosticConsumer;
pub use diagnostic_consumer::console_diagnostic_consumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::LexerDiagnosticKind;
