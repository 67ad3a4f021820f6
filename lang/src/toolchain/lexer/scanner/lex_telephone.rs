use super::*;

/// Digit groups following the `+` country code group.
const TELEPHONE_GROUPS: usize = 3;

// telephone : '+' DIGIT+ (blank+ DIGIT+){3} (blank* 'ext.' blank* DIGIT+)?
pub fn lex_telephone(cursor: &mut Cursor) -> LexResult {
    if !cursor.accept("+") || !cursor.accept_run(DIGITS) {
        return Err(LexerDiagnosticKind::InvalidTelephone);
    }

    for _ in 0..TELEPHONE_GROUPS {
        if !cursor.has_blank() || !cursor.after_blanks().is_ascii_digit() {
            return Err(LexerDiagnosticKind::InvalidTelephone);
        }
        cursor.accept_run(WHITESPACE);
        cursor.accept_run(DIGITS);
    }

    let rest = cursor.rest_after_blanks();
    if rest.get(..4).is_some_and(|ext| ext.eq_ignore_ascii_case("ext.")) {
        cursor.accept_run(WHITESPACE);
        cursor.skip("ext.");
        cursor.accept_run(WHITESPACE);
        if !cursor.accept_run(DIGITS) {
            return Err(LexerDiagnosticKind::InvalidTelephone);
        }
    }

    if !cursor.at_delimiter("") {
        return Err(LexerDiagnosticKind::InvalidTelephone);
    }
    cursor.emit(TokenKind::Value { kind: ValueKind::Telephone });
    Ok(())
}
