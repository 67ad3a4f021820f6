use super::*;

// email : (ANY - blank - '@')+ '@' (ALNUM | '.' | '-' | '_' | ':')+
pub fn lex_email(cursor: &mut Cursor, kind: ValueKind) -> LexResult {
    scan_email(cursor)?;
    cursor.emit(TokenKind::Value { kind });
    Ok(())
}

/// Consumes an email address without emitting it.
pub fn scan_email(cursor: &mut Cursor) -> LexResult {
    if !cursor.accept_except_run(EMAIL_LOCAL_EXCLUDED)
        || !cursor.accept("@")
        || !cursor.accept_run(EMAIL_DOMAIN)
        || !cursor.at_delimiter("")
    {
        return Err(LexerDiagnosticKind::InvalidEmail);
    }
    Ok(())
}

// changed : email blank+ DIGIT{8}
pub fn lex_email_date(cursor: &mut Cursor) -> LexResult {
    lex_email(cursor, ValueKind::Email)?;
    if !cursor.accept_run(WHITESPACE) {
        return Err(LexerDiagnosticKind::InvalidDate);
    }
    cursor.ignore();
    cursor.accept_run(DIGITS);
    if cursor.pending().len() != 8 || !cursor.at_delimiter("") {
        return Err(LexerDiagnosticKind::InvalidDate);
    }
    cursor.emit(TokenKind::Value { kind: ValueKind::Date });
    Ok(())
}
