use super::{Lexer, Token, TokenIndex, TokenKind};
use crate::toolchain::diagnostics::{
    DiagnosticConsumer, DiagnosticLocation, DiagnosticLocationTranslator,
};
use crate::toolchain::source;

/// The complete token stream of a source, kept for random access by a parser.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token<'s>>,
    lines: Vec<&'s str>,
    source: &'s source::SourceBuffer<'s>,
}

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(
        source: &'s source::SourceBuffer<'s>,
        diags: &mut impl DiagnosticConsumer,
    ) -> TokenizedBuffer<'s> {
        let tokens = Lexer::new(source, diags).collect();
        let lines = source.code().split('\n').map(|line| line.trim_end_matches('\r')).collect();
        TokenizedBuffer { tokens, lines, source }
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token<'s>> {
        self.tokens.get(i)
    }

    /// True if lexing stopped on illegal input.
    pub fn has_error(&self) -> bool {
        self.tokens.last().is_some_and(|token| token.kind == TokenKind::Illegal)
    }

    pub fn print_tokens(&self) {
        for token in self.tokens.iter() {
            println!("{}", &token);
        }
    }

    pub fn tokens(&self) -> &Vec<Token<'s>> {
        &self.tokens
    }

    pub fn source(&self) -> &'s source::SourceBuffer<'s> {
        self.source
    }
}

impl<'s> DiagnosticLocationTranslator<'s, TokenIndex> for TokenizedBuffer<'s> {
    fn get_location(&self, token_index: TokenIndex) -> DiagnosticLocation<'s> {
        let token = self.tokens[token_index];
        // The end of input token has no position, point at the file as a whole.
        let line = match usize::try_from(token.line - 1) {
            Ok(line_index) => self.lines.get(line_index).copied().unwrap_or(""),
            Err(_) => "",
        };
        DiagnosticLocation {
            file_name: self.source.file_name(),
            line_number: token.line,
            column_number: token.column,
            line,
        }
    }
}
