use tracing::{debug, trace};

use super::charset::*;
use super::cursor::Cursor;
use super::token::{AttributeKind, ClassKind, Token, TokenKind, ValueKind};
use crate::toolchain::diagnostics::{
    Diagnostic, DiagnosticConsumer, DiagnosticKind, DiagnosticLevel, DiagnosticLocation,
    DiagnosticMessage, LexerDiagnosticKind,
};
use crate::toolchain::source::SourceBuffer;

mod lex_as_number;
mod lex_attribute;
mod lex_authentication;
mod lex_email;
mod lex_free_form;
mod lex_line_end;
mod lex_nic_handle;
mod lex_object_class;
mod lex_policy;
mod lex_telephone;

#[cfg(test)]
mod lex_attribute_unittests;
#[cfg(test)]
mod lex_policy_unittests;

/// Outcome of a value lexer. An error names why the input is illegal, the state machine turns it
/// into the illegal token.
pub type LexResult = Result<(), LexerDiagnosticKind>;

/// Pull-based RPSL lexer. Each call to [Iterator::next] resumes the state machine until at least
/// one token is ready.
///
/// The stream always ends with exactly one [TokenKind::EndOfInput] or [TokenKind::Illegal]
/// token, after which the iterator is exhausted. Every illegal token is reported to the
/// [DiagnosticConsumer] as an error.
pub struct Lexer<'s, 'd> {
    source: &'s SourceBuffer<'s>,
    cursor: Cursor<'s>,
    state: State,
    // Objects whose class keyword has been lexed. Only the first object of the input is lexed.
    objects: usize,
    class_token: Option<Token<'s>>,
    diags: &'d mut dyn DiagnosticConsumer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Start of an object, expecting its class keyword.
    ObjectClass,

    /// Positioned at the first character of a value.
    Value { object: ObjectContext, lexer: ValueLexer },

    /// After a value, expecting blank space, a comment, and a line break.
    LineEnd { object: ObjectContext },

    /// Start of a line inside an object, expecting an attribute or continuation.
    Attribute { object: ObjectContext },

    Done,
}

/// What the state machine remembers about the object being lexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectContext {
    pub class: ClassKind,

    /// The value lexer of the last named attribute, re-run by continuation lines.
    pub continuation: ValueLexer,
}

/// Each grammar an attribute value may follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueLexer {
    AsNumber,
    AsSetName,
    Authentication,
    Email,
    EmailDate,
    FreeForm,
    NicHandle,
    NicHandleList,
    Policy { kind: PolicyKind },
    RegistryName,
    Telephone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyKind {
    Export,
    Import,
    MpExport,
    MpImport,
}

impl PolicyKind {
    pub fn value_kind(self) -> ValueKind {
        match self {
            PolicyKind::Export => ValueKind::ExportPolicy,
            PolicyKind::Import => ValueKind::ImportPolicy,
            PolicyKind::MpExport => ValueKind::MpExportPolicy,
            PolicyKind::MpImport => ValueKind::MpImportPolicy,
        }
    }

    pub fn is_multi_protocol(self) -> bool {
        matches!(self, PolicyKind::MpExport | PolicyKind::MpImport)
    }

    pub fn is_export(self) -> bool {
        matches!(self, PolicyKind::Export | PolicyKind::MpExport)
    }
}

impl<'s, 'd> Lexer<'s, 'd> {
    pub fn new(source: &'s SourceBuffer<'s>, diags: &'d mut impl DiagnosticConsumer) -> Self {
        Lexer {
            source,
            cursor: Cursor::new(source.code()),
            state: State::ObjectClass,
            objects: 0,
            class_token: None,
            diags,
        }
    }

    fn step(&mut self) -> State {
        trace!(
            state = ?self.state,
            line = self.cursor.line(),
            column = self.cursor.token_column(),
            "lexer step"
        );
        match self.state {
            State::ObjectClass => lex_object_class::lex_object_class(self),
            State::Value { object, lexer } => match lex_value(&mut self.cursor, lexer) {
                Ok(()) => State::LineEnd { object },
                Err(kind) => self.illegal(kind),
            },
            State::LineEnd { object } => lex_line_end::lex_line_end(self, object),
            State::Attribute { object } => lex_attribute::lex_attribute(self, object),
            State::Done => State::Done,
        }
    }

    /// Emits the illegal token, reports it, and stops the state machine. The illegal literal is
    /// whatever was pending extended to the next blank space or line break.
    fn illegal(&mut self, kind: LexerDiagnosticKind) -> State {
        self.cursor.accept_except_run(BLANK_OR_NEWLINE);
        let token = self.cursor.emit(TokenKind::Illegal);
        debug!(?kind, literal = token.literal, line = token.line, column = token.column, "illegal");

        let message = DiagnosticMessage {
            kind: DiagnosticKind::LexerError { kind },
            location: self.location(&token),
            body: kind.to_string(),
        };
        let notes = match self.class_token {
            Some(class_token) => vec![DiagnosticMessage {
                kind: DiagnosticKind::LexerError { kind },
                location: self.location(&class_token),
                body: format!("In this {} object.", class_token.kind.keyword()),
            }],
            None => Vec::new(),
        };
        self.diags.handle_diagnostic(&Diagnostic::new(DiagnosticLevel::Error, message, notes));
        State::Done
    }

    fn end(&mut self) -> State {
        self.cursor.emit_end();
        State::Done
    }

    fn location(&self, token: &Token<'s>) -> DiagnosticLocation<'s> {
        DiagnosticLocation {
            file_name: self.source.file_name(),
            line_number: token.line,
            column_number: token.column,
            line: self.cursor.line_text(token.line),
        }
    }
}

impl<'s, 'd> Iterator for Lexer<'s, 'd> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        loop {
            if let Some(token) = self.cursor.pop_token() {
                return Some(token);
            }
            if self.state == State::Done {
                return None;
            }
            self.state = self.step();
        }
    }
}

/// Runs the value lexer for `lexer` on the value starting at the cursor.
fn lex_value(cursor: &mut Cursor, lexer: ValueLexer) -> LexResult {
    match lexer {
        ValueLexer::AsNumber => lex_as_number::lex_as_number(cursor),
        ValueLexer::AsSetName => lex_as_number::lex_as_set_name(cursor),
        ValueLexer::Authentication => lex_authentication::lex_authentication(cursor),
        ValueLexer::Email => lex_email::lex_email(cursor, ValueKind::Email),
        ValueLexer::EmailDate => lex_email::lex_email_date(cursor),
        ValueLexer::FreeForm => lex_free_form::lex_free_form(cursor, ValueKind::FreeForm),
        ValueLexer::NicHandle => lex_nic_handle::lex_nic_handle(cursor),
        ValueLexer::NicHandleList => lex_nic_handle::lex_nic_handle_list(cursor),
        ValueLexer::Policy { kind } => lex_policy::lex_policy(cursor, kind),
        ValueLexer::RegistryName => lex_free_form::lex_free_form(cursor, ValueKind::RegistryName),
        ValueLexer::Telephone => lex_telephone::lex_telephone(cursor),
    }
}

/// True if `text` starts with `keyword`, ignoring ASCII case, and the keyword is not merely the
/// prefix of a longer word.
fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    let matches = text.get(..keyword.len()).is_some_and(|head| head.eq_ignore_ascii_case(keyword));
    matches && text[keyword.len()..].chars().next().map_or(true, |c| !NIC_HANDLE.contains(c))
}

/// Skips lines holding only a comment or nothing at all.
fn skip_comment_lines(cursor: &mut Cursor) {
    while matches!(cursor.peek(), '#' | '\r' | '\n') && !cursor.is_eof() {
        cursor.accept_except_run(NEWLINE);
        cursor.accept("\r");
        if !cursor.accept("\n") {
            break;
        }
    }
    cursor.ignore();
}
