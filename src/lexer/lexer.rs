use log::{debug, trace};

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based scanner over a single source string.
///
/// `position` is the index of the character held in `ch`, `read_position` the index of the next
/// one to examine. `ch` is `None` once the cursor has moved past the end of the input.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            input: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            finished: false,
        };

        lexer.read_char();
        lexer
    }

    /// Scans the next token. Once the input is exhausted every call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.ch {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::EOF, String::new()),
        };

        let kind = match ch {
            '=' | '!' if self.peek_char() == Some('=') => {
                let kind = if ch == '=' {
                    TokenKind::Eq
                } else {
                    TokenKind::NotEq
                };
                let start = self.position;
                self.read_char();
                self.read_char();
                return self.emit(kind, self.slice(start));
            }
            '=' => TokenKind::Assign,
            '!' => TokenKind::Bang,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Asterisk,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            c if is_letter(c) => {
                let literal = self.read_while(|c| is_letter(c) || is_digit(c));
                return self.emit(lookup_ident(&literal), literal);
            }
            c if is_digit(c) => {
                let literal = self.read_while(is_digit);
                return self.emit(TokenKind::Int, literal);
            }
            _ => {
                debug!("illegal character {:?} at offset {}", ch, self.position);
                TokenKind::Illegal
            }
        };

        self.read_char();
        self.emit(kind, ch.to_string())
    }

    fn emit(&self, kind: TokenKind, literal: String) -> Token {
        trace!("{} {:?}", kind, literal);
        MK_TOKEN!(kind, literal)
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    // Leaves the cursor on the first character that fails `predicate`.
    fn read_while(&mut self, predicate: fn(char) -> bool) -> String {
        let start = self.position;
        while self.ch.is_some_and(predicate) {
            self.read_char();
        }
        self.slice(start)
    }

    fn slice(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the terminating `EOF`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }

        Some(token)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
