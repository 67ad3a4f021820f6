use unicode_width::UnicodeWidthChar;

use super::charset::{BLANK_OR_NEWLINE, WHITESPACE};
use super::emitter::TokenEmitter;
use super::token::{Token, TokenKind};

/// Character-level scanning primitives over a single RPSL object.
///
/// The cursor keeps two byte offsets into the input: `start`, the first byte of the token being
/// built, and `pos`, the next byte to read. Everything between them is the pending token literal,
/// which [Cursor::emit] turns into a [Token] and [Cursor::ignore] discards.
///
/// Line and column track the position of `pos`. Columns count terminal cells rather than bytes
/// or characters, so a wide character such as an emoji advances the column by two.
///
/// Design roughly inspired by the rustc lexer Cursor.
#[derive(Debug)]
pub struct Cursor<'s> {
    input: &'s str,
    start: usize,
    pos: usize,
    // Byte width of the character read by the last advance(), 0 once backed up or at the end.
    width: usize,
    line: i32,
    // 1-based cell the next character will occupy.
    column: i32,
    previous: Position,
    emitter: TokenEmitter<'s>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Position {
    line: i32,
    column: i32,
}

impl<'s> Cursor<'s> {
    /// Returned by [Cursor::peek] past the last character.
    pub const EOF: char = '\0';

    pub fn new(input: &'s str) -> Cursor<'s> {
        Cursor {
            input,
            start: 0,
            pos: 0,
            width: 0,
            line: 1,
            column: 1,
            previous: Position { line: 1, column: 1 },
            emitter: TokenEmitter::new(),
        }
    }

    /// Reads the next character, or `None` at the end of input.
    pub fn advance(&mut self) -> Option<char> {
        self.previous = Position { line: self.line, column: self.column };
        let c = match self.rest().chars().next() {
            Some(c) => c,
            None => {
                self.width = 0;
                return None;
            }
        };

        self.width = c.len_utf8();
        self.pos += self.width;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += display_width(c);
        }
        Some(c)
    }

    /// Reverts the last [Cursor::advance]. Only one character of pushback is kept, so a second
    /// call without an intervening advance does nothing.
    pub fn back_up(&mut self) {
        self.pos -= self.width;
        self.width = 0;
        self.line = self.previous.line;
        self.column = self.previous.column;
    }

    pub fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or(Self::EOF)
    }

    pub fn accept(&mut self, valid: &str) -> bool {
        if let Some(c) = self.advance() {
            if valid.contains(c) {
                return true;
            }
        }
        self.back_up();
        false
    }

    /// Consumes characters while they are in `valid`. True if at least one was consumed.
    pub fn accept_run(&mut self, valid: &str) -> bool {
        let mut consumed = false;
        while self.accept(valid) {
            consumed = true;
        }
        consumed
    }

    /// Consumes one character not in `invalid`. Never consumes past the end of input.
    pub fn accept_except(&mut self, invalid: &str) -> bool {
        if let Some(c) = self.advance() {
            if !invalid.contains(c) {
                return true;
            }
        }
        self.back_up();
        false
    }

    pub fn accept_except_run(&mut self, invalid: &str) -> bool {
        let mut consumed = false;
        while self.accept_except(invalid) {
            consumed = true;
        }
        consumed
    }

    /// Advances past `text`, which the caller has already matched against [Cursor::rest].
    pub fn skip(&mut self, text: &str) {
        for _ in text.chars() {
            self.advance();
        }
    }

    /// Turns the pending literal into a token positioned at its last character. Token columns
    /// are 1-based, so a token occupying no cells is placed in the first column.
    pub fn emit(&mut self, kind: TokenKind) -> Token<'s> {
        let literal = self.pending();
        let token = self.emitter.emit(kind, literal, self.line, self.token_column().max(1));
        self.start = self.pos;
        token
    }

    pub fn emit_end(&mut self) -> Token<'s> {
        self.start = self.pos;
        self.emitter.emit_end()
    }

    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    pub fn pop_token(&mut self) -> Option<Token<'s>> {
        self.emitter.pop()
    }

    /// The unread input.
    pub fn rest(&self) -> &'s str {
        &self.input[self.pos..]
    }

    /// The unread input after any horizontal blank space, without consuming the blanks.
    pub fn rest_after_blanks(&self) -> &'s str {
        self.rest().trim_start_matches(|c: char| WHITESPACE.contains(c))
    }

    /// The next character after any horizontal blank space, [Cursor::EOF] if there is none.
    pub fn after_blanks(&self) -> char {
        self.rest_after_blanks().chars().next().unwrap_or(Self::EOF)
    }

    pub fn has_blank(&self) -> bool {
        WHITESPACE.contains(self.peek())
    }

    /// The text consumed but neither emitted nor ignored yet.
    pub fn pending(&self) -> &'s str {
        &self.input[self.start..self.pos]
    }

    /// Byte offset of the next character, for use with [Cursor::since].
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The text consumed since `offset`.
    pub fn since(&self, offset: usize) -> &'s str {
        &self.input[offset..self.pos]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// True when the next character ends a value: blank space, a line break, a comment, the end
    /// of input, or one of the characters in `also`.
    pub fn at_delimiter(&self, also: &str) -> bool {
        let c = self.peek();
        self.is_eof() || c == '#' || BLANK_OR_NEWLINE.contains(c) || also.contains(c)
    }

    pub fn line(&self) -> i32 {
        self.line
    }

    /// Display width of the current line through the last consumed character.
    pub fn token_column(&self) -> i32 {
        self.column - 1
    }

    /// Text of the 1-based `line`, without its line terminator. Empty past the end of input.
    pub fn line_text(&self, line: i32) -> &'s str {
        let index = match usize::try_from(line - 1) {
            Ok(index) => index,
            Err(_) => return "",
        };
        self.input.split('\n').nth(index).map_or("", |text| text.trim_end_matches('\r'))
    }
}

/// Terminal cells occupied by `c`. Control characters, tab and carriage return included, take no
/// cells.
pub fn display_width(c: char) -> i32 {
    if c.is_control() {
        return 0;
    }
    c.width().map_or(0, |w| w as i32)
}
