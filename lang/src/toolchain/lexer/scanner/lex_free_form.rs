use super::*;

// free_form : (ANY - NEWLINE)*
pub fn lex_free_form(cursor: &mut Cursor, kind: ValueKind) -> LexResult {
    // Empty values produce no token.
    if cursor.accept_except_run(NEWLINE) {
        cursor.emit(TokenKind::Value { kind });
    }
    Ok(())
}
