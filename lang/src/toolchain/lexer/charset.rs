//! Character sets handed to the [Cursor](super::cursor::Cursor) accept primitives.
//!
//! Membership is case-sensitive, so sets that accept letters list both cases.

use const_format::concatcp;

pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHA: &str = concatcp!(LOWER, UPPER);
pub const DIGITS: &str = "0123456789";
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";
pub const ALPHANUMERIC: &str = concatcp!(ALPHA, DIGITS);

/// Horizontal blank space, including NEL and no-break space.
pub const WHITESPACE: &str = " \t\u{85}\u{A0}";
pub const NEWLINE: &str = "\r\n";
pub const BLANK_OR_NEWLINE: &str = concatcp!(WHITESPACE, NEWLINE);

/// Characters of a `CRYPT-PW` hash, the base64 alphabet.
pub const CRYPT_ALPHABET: &str = concatcp!(ALPHANUMERIC, "+/");

/// Characters after the leading letter of a NIC handle, also of AS-set and policy names.
pub const NIC_HANDLE: &str = concatcp!(ALPHANUMERIC, "-_");

pub const EMAIL_DOMAIN: &str = concatcp!(ALPHANUMERIC, ".-_:");

/// Characters that may never appear in an email local part.
pub const EMAIL_LOCAL_EXCLUDED: &str = concatcp!(BLANK_OR_NEWLINE, "@");
