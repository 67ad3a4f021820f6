#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::rpsl;
    use crate::toolchain::lexer::scanner::lex_attribute::attributes;
    use crate::toolchain::lexer::scanner::lex_object_class::CLASS_KEYWORDS;
    use crate::toolchain::lexer::token::{AttributeKind, ClassKind, Token, TokenKind, ValueKind};
    use crate::toolchain::lexer::tokenized_buffer_unittests::tests::{
        attribute, check_kinds, check_lexing, class, lex, value,
    };
    use crate::toolchain::source::SourceBuffer;

    #[test]
    fn class_keywords_match_longest_first() {
        for (i, kind) in CLASS_KEYWORDS.iter().enumerate() {
            for later in &CLASS_KEYWORDS[i + 1..] {
                assert!(
                    !later.keyword().starts_with(kind.keyword()),
                    "{} shadows {}",
                    kind.keyword(),
                    later.keyword()
                );
            }
        }
        let mut all = CLASS_KEYWORDS.to_vec();
        all.sort_by_key(|kind| kind.keyword());
        let mut expected = ClassKind::ALL.to_vec();
        expected.sort_by_key(|kind| kind.keyword());
        assert_eq!(all, expected);
    }

    #[test]
    fn attribute_keywords_match_longest_first() {
        for class in ClassKind::ALL {
            let table = attributes(class);
            for (i, kind) in table.iter().enumerate() {
                assert_ne!(*kind, AttributeKind::Continuation);
                for later in &table[i + 1..] {
                    assert!(
                        !later.keyword().starts_with(kind.keyword()),
                        "{} shadows {} in {}",
                        kind.keyword(),
                        later.keyword(),
                        class.keyword()
                    );
                }
            }
        }
    }

    #[test_case("mntner: FOO-MNT", ClassKind::Maintainer, ValueKind::NicHandle, "FOO-MNT")]
    #[test_case("person: John Doe", ClassKind::Person, ValueKind::FreeForm, "John Doe")]
    #[test_case("role: NOC Team", ClassKind::Role, ValueKind::FreeForm, "NOC Team")]
    #[test_case("aut-num: AS65000", ClassKind::AutNum, ValueKind::AsNumber, "AS65000")]
    #[test_case("as-set: AS-CUSTOMERS", ClassKind::AsSet, ValueKind::AsSetName, "AS-CUSTOMERS")]
    #[test_case("route: 192.0.2.0/24", ClassKind::Route, ValueKind::FreeForm, "192.0.2.0/24")]
    #[test_case("route6: 2001:db8::/32", ClassKind::Route6, ValueKind::FreeForm, "2001:db8::/32")]
    #[test_case("route-set: RS-FOO", ClassKind::RouteSet, ValueKind::FreeForm, "RS-FOO")]
    #[test_case("filter-set: FLTR-FOO", ClassKind::FilterSet, ValueKind::FreeForm, "FLTR-FOO")]
    #[test_case("inet-rtr: rtr.net", ClassKind::Router, ValueKind::FreeForm, "rtr.net")]
    #[test_case("rtr-set: RTRS-FOO", ClassKind::RouterSet, ValueKind::FreeForm, "RTRS-FOO")]
    #[test_case("peering-set: PRNG-FOO", ClassKind::PeeringSet, ValueKind::FreeForm, "PRNG-FOO")]
    #[test_case("dictionary: RPSL", ClassKind::Dictionary, ValueKind::FreeForm, "RPSL")]
    #[test_case("MNTNER:\tFOO-MNT", ClassKind::Maintainer, ValueKind::NicHandle, "FOO-MNT")]
    fn object_class(line: &str, kind: ClassKind, value_kind: ValueKind, literal: &str) {
        let text = format!("{}\n", line);
        let source = SourceBuffer::new_from_string(&text, "class");
        let tokens: Vec<(TokenKind, &str)> =
            lex(&source).iter().map(|token| (token.kind, token.literal)).collect();
        assert_eq!(
            tokens,
            vec![
                (class(kind), &line[..kind.keyword().len()]),
                (value(value_kind), literal),
                (TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn leading_comments_and_blank_lines() {
        check_lexing(
            rpsl!("# exported object\n\n\r\nmntner: FOO-MNT\n"),
            vec![
                Token::new(class(ClassKind::Maintainer), "mntner", 4, 6),
                Token::new(value(ValueKind::NicHandle), "FOO-MNT", 4, 15),
                Token::end(),
            ],
        );
    }

    #[test]
    fn comment_lines_between_attributes() {
        check_kinds(
            rpsl!("mntner: FOO-MNT # the maintainer\n# remark\ndescr: x\n"),
            vec![
                (class(ClassKind::Maintainer), "mntner"),
                (value(ValueKind::NicHandle), "FOO-MNT"),
                (attribute(AttributeKind::Description), "descr"),
                (value(ValueKind::FreeForm), "x"),
                (TokenKind::EndOfInput, ""),
            ],
        );
    }

    #[test]
    fn crlf_line_endings() {
        check_kinds(
            rpsl!("mntner: FOO-MNT\r\nsource: RIPE\r\n"),
            vec![
                (class(ClassKind::Maintainer), "mntner"),
                (value(ValueKind::NicHandle), "FOO-MNT"),
                (attribute(AttributeKind::RegistrySource), "source"),
                (value(ValueKind::RegistryName), "RIPE"),
                (TokenKind::EndOfInput, ""),
            ],
        );
    }

    #[test]
    fn missing_trailing_newline() {
        check_kinds(
            rpsl!("mntner: FOO-MNT\nsource: RIPE"),
            vec![
                (class(ClassKind::Maintainer), "mntner"),
                (value(ValueKind::NicHandle), "FOO-MNT"),
                (attribute(AttributeKind::RegistrySource), "source"),
                (value(ValueKind::RegistryName), "RIPE"),
                (TokenKind::EndOfInput, ""),
            ],
        );
    }

    #[test]
    fn attribute_keywords_ignore_case() {
        check_kinds(
            rpsl!("mntner: FOO-MNT\nMnt-By: BAR-MNT\n"),
            vec![
                (class(ClassKind::Maintainer), "mntner"),
                (value(ValueKind::NicHandle), "FOO-MNT"),
                (attribute(AttributeKind::MaintainedBy), "Mnt-By"),
                (value(ValueKind::NicHandle), "BAR-MNT"),
                (TokenKind::EndOfInput, ""),
            ],
        );
    }

    #[test]
    fn unknown_attribute_ends_the_object() {
        // phone: is legal in a person but not in a maintainer.
        check_kinds(
            rpsl!("mntner: FOO-MNT\nphone: +1 555 0100\ndescr: x\n"),
            vec![
                (class(ClassKind::Maintainer), "mntner"),
                (value(ValueKind::NicHandle), "FOO-MNT"),
                (TokenKind::EndOfInput, ""),
            ],
        );
        check_kinds(
            rpsl!("mntner: FOO-MNT\ndescription: x\n"),
            vec![
                (class(ClassKind::Maintainer), "mntner"),
                (value(ValueKind::NicHandle), "FOO-MNT"),
                (TokenKind::EndOfInput, ""),
            ],
        );
    }

    #[test]
    fn only_the_first_object_is_lexed() {
        check_kinds(
            rpsl!("mntner: FOO-MNT\n\nmntner: BAR-MNT\n"),
            vec![
                (class(ClassKind::Maintainer), "mntner"),
                (value(ValueKind::NicHandle), "FOO-MNT"),
                (TokenKind::EndOfInput, ""),
            ],
        );
    }

    #[test]
    fn missing_colon() {
        check_lexing(
            rpsl!("mntner FOO-MNT\n"),
            vec![
                Token::new(class(ClassKind::Maintainer), "mntner", 1, 6),
                Token::new(TokenKind::Illegal, "", 1, 6),
            ],
        );
        check_lexing(
            rpsl!("mntner: FOO-MNT\ndescr x\n"),
            vec![
                Token::new(class(ClassKind::Maintainer), "mntner", 1, 6),
                Token::new(value(ValueKind::NicHandle), "FOO-MNT", 1, 15),
                Token::new(attribute(AttributeKind::Description), "descr", 2, 5),
                Token::new(TokenKind::Illegal, "", 2, 5),
            ],
        );
    }

    #[test]
    fn trailing_input() {
        check_lexing(
            rpsl!("mntner: FOO-MNT BAR-MNT\n"),
            vec![
                Token::new(class(ClassKind::Maintainer), "mntner", 1, 6),
                Token::new(value(ValueKind::NicHandle), "FOO-MNT", 1, 15),
                Token::new(TokenKind::Illegal, "BAR-MNT", 1, 23),
            ],
        );
    }

    #[test]
    fn blank_continuation_after_class() {
        check_kinds(
            rpsl!("person: John\n  Doe\n"),
            vec![
                (class(ClassKind::Person), "person"),
                (value(ValueKind::FreeForm), "John"),
                (attribute(AttributeKind::Continuation), " "),
                (value(ValueKind::FreeForm), "Doe"),
                (TokenKind::EndOfInput, ""),
            ],
        );
    }
}
