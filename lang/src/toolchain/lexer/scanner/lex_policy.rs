use super::*;

/// Address families accepted by an `afi` clause, in match order. Families that prefix another
/// family come after it.
pub const ADDRESS_FAMILIES: [&str; 6] =
    ["ipv4.unicast", "ipv4.multicast", "ipv4", "ipv6.unicast", "ipv6.multicast", "ipv6"];

const POLICY_NAME: &str = const_format::concatcp!(NIC_HANDLE, ".");
const ACTION_VALUE_EXCLUDED: &str = const_format::concatcp!(BLANK_OR_NEWLINE, ";");

// policy   : ('protocol' NAME)? ('into' NAME)? ('afi' afi_list)? peer action* filter
// peer     : 'to' as_number                    (export)
//          | 'from' (as_number | as_set_name)  (import)
//          ;
// action   : 'action' NAME blank* '=' blank* VALUE blank* ';'
// filter   : 'announce' as_list                (export)
//          | 'accept' ('ANY' | as_list)        (import)
//          ;
//
// The whole expression becomes a single token, so blank space between clauses is only consumed
// once the next clause is known to follow.
pub fn lex_policy(cursor: &mut Cursor, kind: PolicyKind) -> LexResult {
    let mut policy = PolicyScanner { cursor, kind };
    policy.scan()?;
    policy.cursor.emit(TokenKind::Value { kind: kind.value_kind() });
    Ok(())
}

struct PolicyScanner<'c, 's> {
    cursor: &'c mut Cursor<'s>,
    kind: PolicyKind,
}

impl<'c, 's> PolicyScanner<'c, 's> {
    fn scan(&mut self) -> LexResult {
        if self.keyword("protocol") {
            self.name()?;
        }
        if self.keyword("into") {
            self.name()?;
        }
        if self.keyword("afi") {
            if !self.kind.is_multi_protocol() {
                return Err(LexerDiagnosticKind::InvalidPolicy);
            }
            self.afi_list()?;
        }

        if self.kind.is_export() {
            self.expect_keyword("to")?;
            self.as_number()?;
        } else {
            self.expect_keyword("from")?;
            self.as_number_or_set()?;
        }

        while self.keyword("action") {
            self.action()?;
        }

        if self.kind.is_export() {
            self.expect_keyword("announce")?;
            self.as_list()
        } else {
            self.expect_keyword("accept")?;
            if self.word("ANY") {
                self.cursor.skip("ANY");
                Ok(())
            } else {
                self.as_list()
            }
        }
    }

    /// Consumes `keyword`, the blank space around it, and returns true if it comes next.
    /// Keywords must be followed by blank space, an argument always follows.
    fn keyword(&mut self, keyword: &str) -> bool {
        let rest = self.cursor.rest_after_blanks();
        let matches = rest.get(..keyword.len()).is_some_and(|k| k.eq_ignore_ascii_case(keyword))
            && rest[keyword.len()..].starts_with(|c: char| WHITESPACE.contains(c));
        if matches {
            self.cursor.accept_run(WHITESPACE);
            self.cursor.skip(keyword);
            self.cursor.accept_run(WHITESPACE);
        }
        matches
    }

    fn expect_keyword(&mut self, keyword: &str) -> LexResult {
        if self.keyword(keyword) {
            Ok(())
        } else {
            Err(LexerDiagnosticKind::InvalidPolicy)
        }
    }

    /// True if `word` comes next at the cursor, ignoring case, followed by a delimiter.
    fn word(&self, word: &str) -> bool {
        let rest = self.cursor.rest();
        rest.get(..word.len()).is_some_and(|w| w.eq_ignore_ascii_case(word))
            && rest[word.len()..].chars().next().map_or(true, |c| {
                c == '#' || c == ',' || BLANK_OR_NEWLINE.contains(c)
            })
    }

    fn name(&mut self) -> LexResult {
        if !self.cursor.accept(ALPHA) {
            return Err(LexerDiagnosticKind::InvalidPolicy);
        }
        self.cursor.accept_run(POLICY_NAME);
        self.delimited()
    }

    fn delimited(&self) -> LexResult {
        if self.cursor.at_delimiter("") {
            Ok(())
        } else {
            Err(LexerDiagnosticKind::InvalidPolicy)
        }
    }

    fn as_number(&mut self) -> LexResult {
        lex_as_number::scan_as_number(self.cursor, ",")
            .map_err(|_| LexerDiagnosticKind::InvalidPolicy)
    }

    fn as_number_or_set(&mut self) -> LexResult {
        lex_as_number::scan_as_number_or_set(self.cursor, ",")
            .map_err(|_| LexerDiagnosticKind::InvalidPolicy)
    }

    // as_list : (as_number | as_set_name) ((blank | ',')+ (as_number | as_set_name))*
    fn as_list(&mut self) -> LexResult {
        self.as_number_or_set()?;
        while self.list_continues(false, |rest| rest.starts_with("AS")) {
            self.as_number_or_set()?;
        }
        Ok(())
    }

    // afi_list : AFI (blank* ',' blank* AFI)*
    fn afi_list(&mut self) -> LexResult {
        self.afi()?;
        while self.list_continues(true, |rest| {
            ADDRESS_FAMILIES.iter().any(|family| {
                rest.get(..family.len()).is_some_and(|f| f.eq_ignore_ascii_case(family))
            })
        }) {
            self.afi()?;
        }
        Ok(())
    }

    fn afi(&mut self) -> LexResult {
        let family = ADDRESS_FAMILIES.into_iter().find(|family| self.word(family));
        match family {
            Some(family) => {
                self.cursor.skip(family);
                Ok(())
            }
            None => Err(LexerDiagnosticKind::InvalidPolicy),
        }
    }

    /// Consumes the separator before the next list element, if `next_element` accepts what
    /// follows it. Separators are blank space with at most one comma, or a comma alone when
    /// `comma_required` is set.
    fn list_continues(
        &mut self,
        comma_required: bool,
        next_element: impl Fn(&str) -> bool,
    ) -> bool {
        let rest = self.cursor.rest_after_blanks();
        let (comma, next) = match rest.strip_prefix(',') {
            Some(after) => (true, after.trim_start_matches(|c: char| WHITESPACE.contains(c))),
            None => (false, rest),
        };
        let separated = comma || (!comma_required && self.cursor.has_blank());
        if !separated || !next_element(next) {
            return false;
        }
        self.cursor.accept_run(WHITESPACE);
        self.cursor.accept(",");
        self.cursor.accept_run(WHITESPACE);
        true
    }

    fn action(&mut self) -> LexResult {
        if !self.cursor.accept(ALPHA) {
            return Err(LexerDiagnosticKind::InvalidPolicy);
        }
        self.cursor.accept_run(POLICY_NAME);
        self.cursor.accept_run(WHITESPACE);
        if !self.cursor.accept("=") {
            return Err(LexerDiagnosticKind::InvalidPolicy);
        }
        self.cursor.accept_run(WHITESPACE);
        if !self.cursor.accept_except_run(ACTION_VALUE_EXCLUDED) {
            return Err(LexerDiagnosticKind::InvalidPolicy);
        }
        self.cursor.accept_run(WHITESPACE);
        if !self.cursor.accept(";") {
            return Err(LexerDiagnosticKind::InvalidPolicy);
        }
        Ok(())
    }
}
