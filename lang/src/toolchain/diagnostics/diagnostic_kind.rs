use std::fmt;

/// The enumerated type of all diagnostics the toolchain emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerError { kind: LexerDiagnosticKind },
}

/// Why the lexer stopped with an illegal token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// An object class or attribute keyword was not followed by `:`.
    MissingColon,

    /// Something other than blank space, a comment, or a line break followed a complete value.
    TrailingInput,

    /// A NIC handle must start with a letter followed by letters, digits, `-` or `_`.
    InvalidNicHandle,

    /// An email address needs a local part, an `@`, and a domain.
    InvalidEmail,

    /// Dates are exactly eight digits, `YYYYMMDD`.
    InvalidDate,

    /// Telephone and fax numbers start with `+` and contain digit groups.
    InvalidTelephone,

    /// Autonomous system numbers are `AS` followed by digits.
    InvalidAsNumber,

    /// AS-set names are `AS-` followed by alphanumerics, `-` or `_`, ending in an alphanumeric.
    InvalidAsSetName,

    /// The `auth` value did not start with a known authentication scheme.
    UnknownAuthScheme,

    /// The credential following a known authentication scheme is malformed.
    InvalidAuthValue,

    /// An import or export policy expression is malformed.
    InvalidPolicy,
}

impl fmt::Display for LexerDiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LexerDiagnosticKind::MissingColon => "Expected ':' after keyword.",
            LexerDiagnosticKind::TrailingInput => "Unexpected input after attribute value.",
            LexerDiagnosticKind::InvalidNicHandle => "Malformed NIC handle.",
            LexerDiagnosticKind::InvalidEmail => "Malformed email address.",
            LexerDiagnosticKind::InvalidDate => "Malformed date, expected YYYYMMDD.",
            LexerDiagnosticKind::InvalidTelephone => "Malformed telephone number.",
            LexerDiagnosticKind::InvalidAsNumber => "Malformed autonomous system number.",
            LexerDiagnosticKind::InvalidAsSetName => "Malformed AS-set name.",
            LexerDiagnosticKind::UnknownAuthScheme => "Unknown authentication scheme.",
            LexerDiagnosticKind::InvalidAuthValue => "Malformed authentication credential.",
            LexerDiagnosticKind::InvalidPolicy => "Malformed routing policy expression.",
        };
        f.write_str(s)
    }
}
