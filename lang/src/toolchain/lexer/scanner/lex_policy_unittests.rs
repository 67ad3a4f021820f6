#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::toolchain::lexer::scanner::lex_policy::ADDRESS_FAMILIES;
    use crate::toolchain::lexer::token::{AttributeKind, TokenKind, ValueKind};
    use crate::toolchain::lexer::tokenized_buffer_unittests::tests::lex;
    use crate::toolchain::source::SourceBuffer;

    /// Lexes a single policy attribute inside an aut-num object, returning the tokens from the
    /// attribute keyword on.
    fn lex_policy(attribute: AttributeKind, value: &str) -> Vec<(TokenKind, String)> {
        let text = format!("aut-num: AS65000\n{}: {}\n", attribute.keyword(), value);
        let source = SourceBuffer::new_from_string(&text, "policy");
        lex(&source)[2..].iter().map(|token| (token.kind, token.literal.to_string())).collect()
    }

    #[test_case(AttributeKind::Export, "to AS174 announce AS-SETTEST" ; "export")]
    #[test_case(
        AttributeKind::Export,
        "protocol BGP4 into OSPF to AS174 announce AS1 AS2, AS-FOO" ;
        "export protocol list"
    )]
    #[test_case(
        AttributeKind::Export,
        "to AS174 action pref = 100; action community.append=65000; announce AS1" ;
        "export actions"
    )]
    #[test_case(AttributeKind::Import, "from AS-PEERS accept ANY" ; "import set any")]
    #[test_case(AttributeKind::Import, "from AS9002 accept AS9002,AS-CUSTOMERS" ; "import list")]
    #[test_case(AttributeKind::Import, "FROM AS1 ACCEPT any" ; "import keyword case")]
    #[test_case(
        AttributeKind::MpExport,
        "afi ipv4.unicast, ipv6 to AS174 announce AS-SETTEST" ;
        "mp export afi list"
    )]
    #[test_case(AttributeKind::MpExport, "to AS174 announce AS1" ; "mp export default afi")]
    #[test_case(
        AttributeKind::MpImport,
        "afi ipv6.unicast from AS9002 accept ANY" ;
        "mp import"
    )]
    fn valid_policy(attribute: AttributeKind, value: &str) {
        assert_eq!(
            lex_policy(attribute, value),
            vec![
                (TokenKind::Attribute { kind: attribute }, attribute.keyword().to_string()),
                (TokenKind::Value { kind: policy_kind(attribute) }, value.to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
    }

    fn policy_kind(attribute: AttributeKind) -> ValueKind {
        match attribute {
            AttributeKind::Export => ValueKind::ExportPolicy,
            AttributeKind::Import => ValueKind::ImportPolicy,
            AttributeKind::MpExport => ValueKind::MpExportPolicy,
            AttributeKind::MpImport => ValueKind::MpImportPolicy,
            _ => unreachable!(),
        }
    }

    #[test]
    fn trailing_comment_is_not_part_of_the_policy() {
        assert_eq!(
            lex_policy(AttributeKind::Export, "to AS1 announce AS2   # upstream")[1],
            (TokenKind::Value { kind: ValueKind::ExportPolicy }, "to AS1 announce AS2".to_string())
        );
    }

    #[test_case(AttributeKind::Export, "from AS1 accept ANY", "from" ; "export with import peer")]
    #[test_case(
        AttributeKind::Import,
        "afi ipv4 from AS1 accept ANY",
        "afi ipv4" ;
        "afi in plain import"
    )]
    #[test_case(AttributeKind::Export, "to AS174 announce", "to AS174" ; "missing announce list")]
    #[test_case(
        AttributeKind::MpImport,
        "afi ipv5 from AS1 accept ANY",
        "afi ipv5" ;
        "unknown address family"
    )]
    #[test_case(AttributeKind::Export, "to AS-FOO announce AS1", "to AS-FOO" ; "export to set")]
    #[test_case(
        AttributeKind::Import,
        "from AS1 accept AS2-",
        "from AS1 accept AS2-" ;
        "malformed list element"
    )]
    #[test_case(
        AttributeKind::Export,
        "to AS1 action pref 100; announce AS2",
        "to AS1 action pref 100;" ;
        "action without assignment"
    )]
    fn invalid_policy(attribute: AttributeKind, value: &str, literal: &str) {
        assert_eq!(
            lex_policy(attribute, value),
            vec![
                (TokenKind::Attribute { kind: attribute }, attribute.keyword().to_string()),
                (TokenKind::Illegal, literal.to_string()),
            ]
        );
    }

    #[test]
    fn folded_policy_is_lexed_line_by_line() {
        // Each physical line must hold a complete expression.
        assert_eq!(
            lex_policy(AttributeKind::Export, "to AS174\n        announce AS-SETTEST"),
            vec![
                (TokenKind::Attribute { kind: AttributeKind::Export }, "export".to_string()),
                (TokenKind::Illegal, "to AS174".to_string()),
            ]
        );
        let policy = TokenKind::Value { kind: ValueKind::ExportPolicy };
        assert_eq!(
            lex_policy(AttributeKind::Export, "to AS1 announce AS2\n+ to AS3 announce AS4"),
            vec![
                (TokenKind::Attribute { kind: AttributeKind::Export }, "export".to_string()),
                (policy, "to AS1 announce AS2".to_string()),
                (TokenKind::Attribute { kind: AttributeKind::Continuation }, "+".to_string()),
                (policy, "to AS3 announce AS4".to_string()),
                (TokenKind::EndOfInput, String::new()),
            ]
        );
    }

    #[test]
    fn address_families_match_longest_first() {
        for (i, family) in ADDRESS_FAMILIES.iter().enumerate() {
            for later in &ADDRESS_FAMILIES[i + 1..] {
                assert!(!later.starts_with(*family), "{} shadows {}", family, later);
            }
        }
    }
}
