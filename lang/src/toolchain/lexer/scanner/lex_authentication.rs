use super::*;

/// Authentication schemes in match order.
pub const AUTH_SCHEMES: [ValueKind; 5] = [
    ValueKind::PgpKey,
    ValueKind::CryptPassword,
    ValueKind::Md5Password,
    ValueKind::MailFromPassword,
    ValueKind::NoAuthentication,
];

// auth : 'PGPKey-' HEX{8}
//      | 'CRYPT-PW' blank+ CRYPT{13}
//      | 'MD5-pw' blank+ '$1$' (ANY - '$'){0,8} '$' ANY+
//      | 'MAIL-FROM' blank+ email
//      | 'NONE'
//      ;
pub fn lex_authentication(cursor: &mut Cursor) -> LexResult {
    let rest = cursor.rest();
    let scheme = AUTH_SCHEMES.into_iter().find(|scheme| {
        scheme.prefix().is_some_and(|prefix| {
            rest.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    });

    match scheme {
        Some(ValueKind::PgpKey) => lex_pgp_key(cursor),
        Some(ValueKind::CryptPassword) => lex_crypt_password(cursor),
        Some(ValueKind::Md5Password) => lex_md5_password(cursor),
        Some(ValueKind::MailFromPassword) => lex_mail_from(cursor),
        Some(ValueKind::NoAuthentication) => lex_no_authentication(cursor),
        _ => Err(LexerDiagnosticKind::UnknownAuthScheme),
    }
}

/// Consumes the scheme prefix of `kind`, and the blank space after it when `blank` is set, leaving
/// the cursor at the credential.
fn skip_prefix(cursor: &mut Cursor, kind: ValueKind, blank: bool) -> LexResult {
    if let Some(prefix) = kind.prefix() {
        cursor.skip(prefix);
    }
    if blank && !cursor.accept_run(WHITESPACE) {
        return Err(LexerDiagnosticKind::InvalidAuthValue);
    }
    cursor.ignore();
    Ok(())
}

fn lex_pgp_key(cursor: &mut Cursor) -> LexResult {
    skip_prefix(cursor, ValueKind::PgpKey, false)?;
    cursor.accept_run(HEX_DIGITS);
    if cursor.pending().len() != 8 || !cursor.at_delimiter("") {
        return Err(LexerDiagnosticKind::InvalidAuthValue);
    }
    cursor.emit(TokenKind::Value { kind: ValueKind::PgpKey });
    Ok(())
}

fn lex_crypt_password(cursor: &mut Cursor) -> LexResult {
    skip_prefix(cursor, ValueKind::CryptPassword, true)?;
    cursor.accept_run(CRYPT_ALPHABET);
    if cursor.pending().len() != 13 || !cursor.at_delimiter("") {
        return Err(LexerDiagnosticKind::InvalidAuthValue);
    }
    cursor.emit(TokenKind::Value { kind: ValueKind::CryptPassword });
    Ok(())
}

fn lex_md5_password(cursor: &mut Cursor) -> LexResult {
    const SALT_EXCLUDED: &str = const_format::concatcp!(BLANK_OR_NEWLINE, "$");

    skip_prefix(cursor, ValueKind::Md5Password, true)?;
    if !cursor.rest().starts_with("$1$") {
        return Err(LexerDiagnosticKind::InvalidAuthValue);
    }
    cursor.skip("$1$");
    for _ in 0..8 {
        if !cursor.accept_except(SALT_EXCLUDED) {
            break;
        }
    }
    if !cursor.accept("$") || !cursor.accept_except_run(BLANK_OR_NEWLINE) {
        return Err(LexerDiagnosticKind::InvalidAuthValue);
    }
    cursor.emit(TokenKind::Value { kind: ValueKind::Md5Password });
    Ok(())
}

fn lex_mail_from(cursor: &mut Cursor) -> LexResult {
    skip_prefix(cursor, ValueKind::MailFromPassword, true)?;
    lex_email::lex_email(cursor, ValueKind::MailFromPassword)
}

fn lex_no_authentication(cursor: &mut Cursor) -> LexResult {
    cursor.skip("NONE");
    if !cursor.at_delimiter("") {
        return Err(LexerDiagnosticKind::UnknownAuthScheme);
    }
    cursor.emit(TokenKind::Value { kind: ValueKind::NoAuthentication });
    Ok(())
}
