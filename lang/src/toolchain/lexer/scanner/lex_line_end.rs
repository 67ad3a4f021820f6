use super::*;

// line_end : blank* ('#' comment)? '\r'? ('\n' | EOF)
pub fn lex_line_end(lexer: &mut Lexer, object: ObjectContext) -> State {
    let cursor = &mut lexer.cursor;
    cursor.accept_run(WHITESPACE);
    if cursor.peek() == '#' {
        cursor.accept_except_run(NEWLINE);
    }
    cursor.ignore();

    if cursor.rest().starts_with("\r\n") {
        cursor.skip("\r\n");
    } else if !cursor.accept("\n") && !cursor.is_eof() {
        return lexer.illegal(LexerDiagnosticKind::TrailingInput);
    }
    cursor.ignore();
    State::Attribute { object }
}
