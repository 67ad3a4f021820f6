use super::*;

/// Class keywords in match order. Keywords that prefix another keyword come after it.
pub const CLASS_KEYWORDS: [ClassKind; 13] = [
    ClassKind::Maintainer,
    ClassKind::Person,
    ClassKind::Role,
    ClassKind::AutNum,
    ClassKind::AsSet,
    ClassKind::Route6,
    ClassKind::RouteSet,
    ClassKind::Route,
    ClassKind::FilterSet,
    ClassKind::Router,
    ClassKind::RouterSet,
    ClassKind::PeeringSet,
    ClassKind::Dictionary,
];

// object : CLASS ':' blank* value
pub fn lex_object_class(lexer: &mut Lexer) -> State {
    // One object per input, anything after the first object ends the stream.
    if lexer.objects > 0 {
        return lexer.end();
    }

    skip_comment_lines(&mut lexer.cursor);

    let rest = lexer.cursor.rest();
    let class = match CLASS_KEYWORDS.into_iter().find(|c| starts_with_keyword(rest, c.keyword())) {
        Some(class) => class,
        None => return lexer.end(),
    };

    lexer.cursor.skip(class.keyword());
    let token = lexer.cursor.emit(TokenKind::Class { kind: class });
    lexer.class_token = Some(token);
    lexer.objects += 1;

    if !lexer.cursor.accept(":") {
        return lexer.illegal(LexerDiagnosticKind::MissingColon);
    }
    lexer.cursor.accept_run(WHITESPACE);
    lexer.cursor.ignore();

    let value = class_value_lexer(class);
    State::Value { object: ObjectContext { class, continuation: value }, lexer: value }
}

/// The grammar of the value naming an object of `class`.
pub fn class_value_lexer(class: ClassKind) -> ValueLexer {
    match class {
        ClassKind::Maintainer => ValueLexer::NicHandle,
        ClassKind::AutNum => ValueLexer::AsNumber,
        ClassKind::AsSet => ValueLexer::AsSetName,
        ClassKind::Person
        | ClassKind::Role
        | ClassKind::Route
        | ClassKind::Route6
        | ClassKind::RouteSet
        | ClassKind::FilterSet
        | ClassKind::Router
        | ClassKind::RouterSet
        | ClassKind::PeeringSet
        | ClassKind::Dictionary => ValueLexer::FreeForm,
    }
}
