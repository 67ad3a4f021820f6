use super::*;

// as_number : 'AS' DIGIT+
pub fn lex_as_number(cursor: &mut Cursor) -> LexResult {
    scan_as_number(cursor, "")?;
    cursor.emit(TokenKind::Value { kind: ValueKind::AsNumber });
    Ok(())
}

// as_set_name : 'AS-' (ALNUM | '-' | '_')* ALNUM
pub fn lex_as_set_name(cursor: &mut Cursor) -> LexResult {
    scan_as_set_name(cursor, "")?;
    cursor.emit(TokenKind::Value { kind: ValueKind::AsSetName });
    Ok(())
}

/// Consumes an AS number followed by a delimiter or one of `also`.
pub fn scan_as_number(cursor: &mut Cursor, also: &str) -> LexResult {
    if !cursor.rest().starts_with("AS") {
        return Err(LexerDiagnosticKind::InvalidAsNumber);
    }
    cursor.skip("AS");
    if !cursor.accept_run(DIGITS) || !cursor.at_delimiter(also) {
        return Err(LexerDiagnosticKind::InvalidAsNumber);
    }
    Ok(())
}

/// Consumes an AS-set name followed by a delimiter or one of `also`.
pub fn scan_as_set_name(cursor: &mut Cursor, also: &str) -> LexResult {
    if !cursor.rest().starts_with("AS-") {
        return Err(LexerDiagnosticKind::InvalidAsSetName);
    }
    let offset = cursor.offset();
    cursor.skip("AS-");
    cursor.accept_run(NIC_HANDLE);
    let ends_alphanumeric = cursor.since(offset).ends_with(|c: char| c.is_ascii_alphanumeric());
    if !ends_alphanumeric || !cursor.at_delimiter(also) {
        return Err(LexerDiagnosticKind::InvalidAsSetName);
    }
    Ok(())
}

/// Consumes either an AS-set name or an AS number.
pub fn scan_as_number_or_set(cursor: &mut Cursor, also: &str) -> LexResult {
    if cursor.rest().starts_with("AS-") {
        scan_as_set_name(cursor, also)
    } else {
        scan_as_number(cursor, also)
    }
}
