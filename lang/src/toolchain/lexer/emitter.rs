use std::collections::VecDeque;

use super::token::{Token, TokenKind};

/// FIFO boundary between the state machine producing [Token]s and the caller pulling them.
///
/// A single scanner step may finish several tokens (a list of NIC handles, an email followed by a
/// date), so the queue holds them until the consumer asks.
#[derive(Debug, Default)]
pub struct TokenEmitter<'s> {
    queue: VecDeque<Token<'s>>,
}

impl<'s> TokenEmitter<'s> {
    pub fn new() -> TokenEmitter<'s> {
        TokenEmitter { queue: VecDeque::new() }
    }

    pub fn emit(&mut self, kind: TokenKind, literal: &'s str, line: i32, column: i32) -> Token<'s> {
        let token = Token::new(kind, literal, line, column);
        self.queue.push_back(token);
        token
    }

    pub fn emit_end(&mut self) -> Token<'s> {
        let token = Token::end();
        self.queue.push_back(token);
        token
    }

    pub fn pop(&mut self) -> Option<Token<'s>> {
        self.queue.pop_front()
    }
}
