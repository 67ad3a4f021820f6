use super::*;

pub const MAINTAINER_ATTRIBUTES: &[AttributeKind] = &[
    AttributeKind::Description,
    AttributeKind::AdminContact,
    AttributeKind::TechContact,
    AttributeKind::UpdatedToEmail,
    AttributeKind::MaintainerNotifyEmail,
    AttributeKind::Authentication,
    AttributeKind::Remarks,
    AttributeKind::NotifyEmail,
    AttributeKind::MaintainedBy,
    AttributeKind::ChangedAtAndBy,
    AttributeKind::RegistrySource,
];

pub const PERSON_ATTRIBUTES: &[AttributeKind] = &[
    AttributeKind::Address,
    AttributeKind::Phone,
    AttributeKind::Fax,
    AttributeKind::Email,
    AttributeKind::NicHandle,
    AttributeKind::Remarks,
    AttributeKind::NotifyEmail,
    AttributeKind::MaintainedBy,
    AttributeKind::ChangedAtAndBy,
    AttributeKind::RegistrySource,
];

pub const ROLE_ATTRIBUTES: &[AttributeKind] = &[
    AttributeKind::Address,
    AttributeKind::Phone,
    AttributeKind::Fax,
    AttributeKind::Email,
    AttributeKind::AdminContact,
    AttributeKind::TechContact,
    AttributeKind::NicHandle,
    AttributeKind::Remarks,
    AttributeKind::NotifyEmail,
    AttributeKind::MaintainedBy,
    AttributeKind::ChangedAtAndBy,
    AttributeKind::RegistrySource,
];

pub const AUT_NUM_ATTRIBUTES: &[AttributeKind] = &[
    AttributeKind::AsName,
    AttributeKind::Description,
    AttributeKind::Import,
    AttributeKind::Export,
    AttributeKind::MpImport,
    AttributeKind::MpExport,
    AttributeKind::AdminContact,
    AttributeKind::TechContact,
    AttributeKind::Remarks,
    AttributeKind::NotifyEmail,
    AttributeKind::MaintainedBy,
    AttributeKind::ChangedAtAndBy,
    AttributeKind::RegistrySource,
];

/// Attributes every RPSL class accepts.
pub const COMMON_ATTRIBUTES: &[AttributeKind] = &[
    AttributeKind::Description,
    AttributeKind::AdminContact,
    AttributeKind::TechContact,
    AttributeKind::Remarks,
    AttributeKind::NotifyEmail,
    AttributeKind::MaintainedBy,
    AttributeKind::ChangedAtAndBy,
    AttributeKind::RegistrySource,
];

/// The attributes legal in an object of `class`, in match order.
pub fn attributes(class: ClassKind) -> &'static [AttributeKind] {
    match class {
        ClassKind::Maintainer => MAINTAINER_ATTRIBUTES,
        ClassKind::Person => PERSON_ATTRIBUTES,
        ClassKind::Role => ROLE_ATTRIBUTES,
        ClassKind::AutNum => AUT_NUM_ATTRIBUTES,
        ClassKind::AsSet
        | ClassKind::Route
        | ClassKind::Route6
        | ClassKind::RouteSet
        | ClassKind::FilterSet
        | ClassKind::Router
        | ClassKind::RouterSet
        | ClassKind::PeeringSet
        | ClassKind::Dictionary => COMMON_ATTRIBUTES,
    }
}

/// The grammar of the value following `attribute`.
pub fn attribute_value_lexer(attribute: AttributeKind) -> ValueLexer {
    match attribute {
        AttributeKind::Address
        | AttributeKind::AsName
        | AttributeKind::Description
        | AttributeKind::Remarks => ValueLexer::FreeForm,
        AttributeKind::AdminContact | AttributeKind::MaintainedBy | AttributeKind::TechContact => {
            ValueLexer::NicHandleList
        }
        AttributeKind::NicHandle => ValueLexer::NicHandle,
        AttributeKind::Email
        | AttributeKind::MaintainerNotifyEmail
        | AttributeKind::NotifyEmail
        | AttributeKind::UpdatedToEmail => ValueLexer::Email,
        AttributeKind::ChangedAtAndBy => ValueLexer::EmailDate,
        AttributeKind::Fax | AttributeKind::Phone => ValueLexer::Telephone,
        AttributeKind::Authentication => ValueLexer::Authentication,
        AttributeKind::RegistrySource => ValueLexer::RegistryName,
        AttributeKind::Export => ValueLexer::Policy { kind: PolicyKind::Export },
        AttributeKind::Import => ValueLexer::Policy { kind: PolicyKind::Import },
        AttributeKind::MpExport => ValueLexer::Policy { kind: PolicyKind::MpExport },
        AttributeKind::MpImport => ValueLexer::Policy { kind: PolicyKind::MpImport },
        AttributeKind::Continuation => {
            unreachable!("continuation lines reuse the previous attribute's value lexer")
        }
    }
}

// attribute    : ATTRIBUTE ':' blank* value
//              | CONTINUATION blank* value?
//              | '#' comment
//              ;
pub fn lex_attribute(lexer: &mut Lexer, object: ObjectContext) -> State {
    let cursor = &mut lexer.cursor;

    // Comment lines are allowed between attributes.
    if cursor.peek() == '#' {
        cursor.accept_except_run(NEWLINE);
        cursor.accept("\r");
        cursor.accept("\n");
        cursor.ignore();
        return State::Attribute { object };
    }

    // Line folding, the value continues with the grammar of the last named attribute.
    if matches!(cursor.peek(), ' ' | '\t' | '+') {
        cursor.advance();
        cursor.emit(TokenKind::Attribute { kind: AttributeKind::Continuation });
        cursor.accept_run(WHITESPACE);
        cursor.ignore();
        if cursor.is_eof() || matches!(cursor.peek(), '#' | '\r' | '\n') {
            return State::LineEnd { object };
        }
        return State::Value { object, lexer: object.continuation };
    }

    let rest = cursor.rest();
    let attribute =
        match attributes(object.class).iter().find(|a| starts_with_keyword(rest, a.keyword())) {
            Some(attribute) => *attribute,
            // Not an attribute of this object, so the object is over.
            None => return State::ObjectClass,
        };

    cursor.skip(attribute.keyword());
    cursor.emit(TokenKind::Attribute { kind: attribute });
    if !cursor.accept(":") {
        return lexer.illegal(LexerDiagnosticKind::MissingColon);
    }
    cursor.accept_run(WHITESPACE);
    cursor.ignore();

    let value = attribute_value_lexer(attribute);
    let object = ObjectContext { class: object.class, continuation: value };
    State::Value { object, lexer: value }
}
