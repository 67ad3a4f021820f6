use super::*;

// nic_handle : ALPHA (ALNUM | '-' | '_')*
pub fn lex_nic_handle(cursor: &mut Cursor) -> LexResult {
    if !cursor.accept(ALPHA) {
        return Err(LexerDiagnosticKind::InvalidNicHandle);
    }
    cursor.accept_run(NIC_HANDLE);
    if !cursor.at_delimiter(",") {
        return Err(LexerDiagnosticKind::InvalidNicHandle);
    }
    cursor.emit(TokenKind::Value { kind: ValueKind::NicHandle });
    Ok(())
}

// nic_handle_list : nic_handle (blank* ',' blank* nic_handle)*
pub fn lex_nic_handle_list(cursor: &mut Cursor) -> LexResult {
    lex_nic_handle(cursor)?;
    while cursor.after_blanks() == ',' {
        cursor.accept_run(WHITESPACE);
        cursor.accept(",");
        cursor.accept_run(WHITESPACE);
        cursor.ignore();
        lex_nic_handle(cursor)?;
    }
    Ok(())
}
