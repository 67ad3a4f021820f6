//! An RPSL lexer, which splits the text of a registry object into tokens for parsing.
//!
//! RPSL is line oriented. Each object starts with a class keyword line, `mntner: FOO-MNT` for
//! example, followed by one attribute per line. Lines starting with blank space or `+` continue
//! the value of the previous attribute. Every attribute value has its own small grammar, so the
//! lexer is a state machine that tracks the object class, the attribute being lexed, and the
//! value grammar continuation lines fall back to.
//!
//! The [Lexer] is a pull-based iterator of light-weight [Token]s borrowing their text from the
//! source. Blank space, colons, comments, and line breaks are consumed silently. The first input
//! that matches no expected grammar produces a single [TokenKind::Illegal] token and ends the
//! stream, there is no error recovery. Well-formed input ends with [TokenKind::EndOfInput].
//!
//! Only the first object of the input is lexed.
//!

pub mod charset;
pub mod cursor;
pub mod emitter;
pub mod scanner;
pub mod token;
pub mod tokenized_buffer;


pub use scanner::Lexer;
pub use token::{AttributeKind, ClassKind, Token, TokenKind, ValueKind};
pub use tokenized_buffer::TokenizedBuffer;

pub type TokenIndex = usize;
