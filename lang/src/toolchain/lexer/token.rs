use std::fmt::Display;

/// Represents a single lexical token of an RPSL object.
///
/// Blank space, colons, comments, and line breaks between values are consumed silently, so only
/// the meaningful parts of the object appear as [Token]s. [Token]s borrow their text from the
/// source and are small enough to copy freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    /// The kind of Token.
    pub kind: TokenKind,

    /// The exact source substring the Token was lexed from.
    pub literal: &'s str,

    /// The 1-based line position in the input string, or 0 for [TokenKind::EndOfInput].
    pub line: i32,

    /// The display width of the token's line up to and including the token's last character.
    /// Wide characters such as emoji count as two columns. 0 for [TokenKind::EndOfInput].
    pub column: i32,
}

const_assert!(std::mem::size_of::<Token>() <= 32);

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, literal: &'s str, line: i32, column: i32) -> Token<'s> {
        Token { kind, literal, line, column }
    }

    pub fn end() -> Token<'s> {
        Token { kind: TokenKind::EndOfInput, literal: "", line: 0, column: 0 }
    }

    /// True for the two kinds that terminate a token stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput | TokenKind::Illegal)
    }
}

/// An enumeration of all possible Token types in an RPSL object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An attribute keyword such as `descr`, or the marker of a continuation line.
    Attribute { kind: AttributeKind },

    /// The object class keyword on the first line of an object, such as `mntner`.
    Class { kind: ClassKind },

    /// Nothing more to lex. Always the last token of a well-formed stream.
    EndOfInput,

    /// Input that matches no grammar expected at this position. Always the last token of a
    /// malformed stream.
    Illegal,

    /// An attribute value.
    Value { kind: ValueKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// `as-set`, a named set of autonomous systems.
    AsSet,

    /// `aut-num`, an autonomous system and its routing policy.
    AutNum,

    /// `dictionary`, RPSL language extensions.
    Dictionary,

    /// `filter-set`, a named route filter.
    FilterSet,

    /// `mntner`, the authentication data for objects it maintains.
    Maintainer,

    /// `peering-set`, a named set of peerings.
    PeeringSet,

    /// `person`, a contact person.
    Person,

    /// `role`, a contact role shared by several people.
    Role,

    /// `route`, an IPv4 route origination.
    Route,

    /// `route6`, an IPv6 route origination.
    Route6,

    /// `route-set`, a named set of routes.
    RouteSet,

    /// `inet-rtr`, a router.
    Router,

    /// `rtr-set`, a named set of routers.
    RouterSet,
}

impl ClassKind {
    pub const ALL: [ClassKind; 13] = [
        ClassKind::AsSet,
        ClassKind::AutNum,
        ClassKind::Dictionary,
        ClassKind::FilterSet,
        ClassKind::Maintainer,
        ClassKind::PeeringSet,
        ClassKind::Person,
        ClassKind::Role,
        ClassKind::Route,
        ClassKind::Route6,
        ClassKind::RouteSet,
        ClassKind::Router,
        ClassKind::RouterSet,
    ];

    /// The canonical lowercase keyword introducing an object of this class.
    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::AsSet => "as-set",
            ClassKind::AutNum => "aut-num",
            ClassKind::Dictionary => "dictionary",
            ClassKind::FilterSet => "filter-set",
            ClassKind::Maintainer => "mntner",
            ClassKind::PeeringSet => "peering-set",
            ClassKind::Person => "person",
            ClassKind::Role => "role",
            ClassKind::Route => "route",
            ClassKind::Route6 => "route6",
            ClassKind::RouteSet => "route-set",
            ClassKind::Router => "inet-rtr",
            ClassKind::RouterSet => "rtr-set",
        }
    }

    /// Case-insensitive reverse lookup of [ClassKind::keyword].
    pub fn from_keyword(keyword: &str) -> Option<ClassKind> {
        ClassKind::ALL.into_iter().find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// `address`, a postal address line.
    Address,

    /// `admin-c`, NIC handles of administrative contacts.
    AdminContact,

    /// `as-name`, the symbolic name of an autonomous system.
    AsName,

    /// `auth`, an authentication scheme and credential.
    Authentication,

    /// `changed`, who last changed the object and when.
    ChangedAtAndBy,

    /// A line starting with blank space or `+`, extending the previous attribute's value.
    Continuation,

    /// `descr`, a free-form description.
    Description,

    /// `e-mail`, a contact email address.
    Email,

    /// `export`, an outbound routing policy.
    Export,

    /// `fax-no`, a fax number.
    Fax,

    /// `import`, an inbound routing policy.
    Import,

    /// `mnt-by`, NIC handles of the maintainers protecting this object.
    MaintainedBy,

    /// `mnt-nfy`, who to notify about changes to objects this maintainer protects.
    MaintainerNotifyEmail,

    /// `mp-export`, an outbound multi-protocol routing policy.
    MpExport,

    /// `mp-import`, an inbound multi-protocol routing policy.
    MpImport,

    /// `nic-hdl`, the NIC handle naming this contact.
    NicHandle,

    /// `notify`, who to notify about changes to this object.
    NotifyEmail,

    /// `phone`, a telephone number.
    Phone,

    /// `source`, the registry the object belongs to.
    RegistrySource,

    /// `remarks`, free-form remarks.
    Remarks,

    /// `tech-c`, NIC handles of technical contacts.
    TechContact,

    /// `upd-to`, who to notify about failed updates.
    UpdatedToEmail,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 22] = [
        AttributeKind::Address,
        AttributeKind::AdminContact,
        AttributeKind::AsName,
        AttributeKind::Authentication,
        AttributeKind::ChangedAtAndBy,
        AttributeKind::Continuation,
        AttributeKind::Description,
        AttributeKind::Email,
        AttributeKind::Export,
        AttributeKind::Fax,
        AttributeKind::Import,
        AttributeKind::MaintainedBy,
        AttributeKind::MaintainerNotifyEmail,
        AttributeKind::MpExport,
        AttributeKind::MpImport,
        AttributeKind::NicHandle,
        AttributeKind::NotifyEmail,
        AttributeKind::Phone,
        AttributeKind::RegistrySource,
        AttributeKind::Remarks,
        AttributeKind::TechContact,
        AttributeKind::UpdatedToEmail,
    ];

    /// The canonical lowercase attribute keyword. A continuation is keyed by its explicit `+`
    /// marker, though blank space marks continuations too.
    pub fn keyword(self) -> &'static str {
        match self {
            AttributeKind::Address => "address",
            AttributeKind::AdminContact => "admin-c",
            AttributeKind::AsName => "as-name",
            AttributeKind::Authentication => "auth",
            AttributeKind::ChangedAtAndBy => "changed",
            AttributeKind::Continuation => "+",
            AttributeKind::Description => "descr",
            AttributeKind::Email => "e-mail",
            AttributeKind::Export => "export",
            AttributeKind::Fax => "fax-no",
            AttributeKind::Import => "import",
            AttributeKind::MaintainedBy => "mnt-by",
            AttributeKind::MaintainerNotifyEmail => "mnt-nfy",
            AttributeKind::MpExport => "mp-export",
            AttributeKind::MpImport => "mp-import",
            AttributeKind::NicHandle => "nic-hdl",
            AttributeKind::NotifyEmail => "notify",
            AttributeKind::Phone => "phone",
            AttributeKind::RegistrySource => "source",
            AttributeKind::Remarks => "remarks",
            AttributeKind::TechContact => "tech-c",
            AttributeKind::UpdatedToEmail => "upd-to",
        }
    }

    /// Case-insensitive reverse lookup of [AttributeKind::keyword].
    pub fn from_keyword(keyword: &str) -> Option<AttributeKind> {
        AttributeKind::ALL.into_iter().find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `AS` followed by digits, `AS65536` for example.
    AsNumber,

    /// `AS-` followed by a name ending in an alphanumeric, `AS-EXAMPLE` for example.
    AsSetName,

    /// The 13 character hash following `CRYPT-PW`.
    CryptPassword,

    /// Eight digits, `YYYYMMDD`.
    Date,

    /// `local-part@domain`.
    Email,

    /// The expression following `export:`.
    ExportPolicy,

    /// Any text up to the end of the line.
    FreeForm,

    /// The expression following `import:`.
    ImportPolicy,

    /// The email address following `MAIL-FROM`.
    MailFromPassword,

    /// The `$1$salt$digest` hash following `MD5-pw`.
    Md5Password,

    /// The expression following `mp-export:`.
    MpExportPolicy,

    /// The expression following `mp-import:`.
    MpImportPolicy,

    /// A letter followed by letters, digits, `-` or `_`, `FOO-MNT` for example.
    NicHandle,

    /// The `NONE` authentication scheme.
    NoAuthentication,

    /// The 8 hex digit key id following `PGPKey-`.
    PgpKey,

    /// The registry named by a `source:` attribute.
    RegistryName,

    /// `+` followed by digit groups and an optional `ext.` extension.
    Telephone,
}

impl ValueKind {
    /// The literal prefix announcing an authentication scheme, `None` for every other value.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            ValueKind::CryptPassword => Some("CRYPT-PW"),
            ValueKind::MailFromPassword => Some("MAIL-FROM"),
            ValueKind::Md5Password => Some("MD5-pw"),
            ValueKind::NoAuthentication => Some("NONE"),
            ValueKind::PgpKey => Some("PGPKey-"),
            ValueKind::AsNumber
            | ValueKind::AsSetName
            | ValueKind::Date
            | ValueKind::Email
            | ValueKind::ExportPolicy
            | ValueKind::FreeForm
            | ValueKind::ImportPolicy
            | ValueKind::MpExportPolicy
            | ValueKind::MpImportPolicy
            | ValueKind::NicHandle
            | ValueKind::RegistryName
            | ValueKind::Telephone => None,
        }
    }

    fn description(self) -> &'static str {
        match self {
            ValueKind::AsNumber => "as number",
            ValueKind::AsSetName => "as-set name",
            ValueKind::CryptPassword => "crypt password",
            ValueKind::Date => "date",
            ValueKind::Email => "email address",
            ValueKind::ExportPolicy => "export policy",
            ValueKind::FreeForm => "string",
            ValueKind::ImportPolicy => "import policy",
            ValueKind::MailFromPassword => "mail-from address",
            ValueKind::Md5Password => "md5 password",
            ValueKind::MpExportPolicy => "multi-protocol export policy",
            ValueKind::MpImportPolicy => "multi-protocol import policy",
            ValueKind::NicHandle => "nic handle",
            ValueKind::NoAuthentication => "no authentication",
            ValueKind::PgpKey => "pgp key",
            ValueKind::RegistryName => "registry name",
            ValueKind::Telephone => "telephone number",
        }
    }
}

impl TokenKind {
    /// The keyword or literal prefix this kind is spelled with in RPSL source.
    ///
    /// Only classes, attributes, and authentication schemes have one. Panics for any other kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            TokenKind::Attribute { kind } => kind.keyword(),
            TokenKind::Class { kind } => kind.keyword(),
            TokenKind::Value { kind } => match kind.prefix() {
                Some(prefix) => prefix,
                None => panic!("value kind {:?} has no keyword", kind),
            },
            TokenKind::EndOfInput | TokenKind::Illegal => {
                panic!("token kind {:?} has no keyword", self)
            }
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Attribute { kind: AttributeKind::Continuation } => {
                f.write_str("continuation")
            }
            TokenKind::Attribute { kind: _ } => write!(f, "attribute {}", self.keyword()),
            TokenKind::Class { kind: _ } => write!(f, "class {}", self.keyword()),
            TokenKind::EndOfInput => f.write_str("end of input"),
            TokenKind::Illegal => f.write_str("illegal"),
            TokenKind::Value { kind } => f.write_str(kind.description()),
        }
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            _ => write!(f, "{}:{} {} '{}'", self.line, self.column, self.kind, self.literal),
        }
    }
}
