use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over a single source string.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the
/// input is exhausted every further call yields an `EOF` token.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// The character under the cursor.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character after the one under the cursor.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remainder().chars();
        chars.next();
        chars.next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.at() {
            self.advance_n(1);
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, "");
        };

        match ch {
            '=' => two_char_handler(self, TokenKind::Assign, TokenKind::Equals),
            '!' => two_char_handler(self, TokenKind::Bang, TokenKind::NotEquals),
            ';' => default_handler(self, TokenKind::Semicolon),
            ',' => default_handler(self, TokenKind::Comma),
            '(' => default_handler(self, TokenKind::OpenParen),
            ')' => default_handler(self, TokenKind::CloseParen),
            '{' => default_handler(self, TokenKind::OpenCurly),
            '}' => default_handler(self, TokenKind::CloseCurly),
            '+' => default_handler(self, TokenKind::Plus),
            '-' => default_handler(self, TokenKind::Minus),
            '*' => default_handler(self, TokenKind::Asterisk),
            '/' => default_handler(self, TokenKind::Slash),
            '<' => default_handler(self, TokenKind::Less),
            '>' => default_handler(self, TokenKind::Greater),
            '"' => string_handler(self),
            c if c.is_ascii_alphabetic() || c == '_' => symbol_handler(self),
            c if c.is_ascii_digit() => number_handler(self),
            _ => default_handler(self, TokenKind::Illegal),
        }
    }
}

/// Emits the character under the cursor as a token of `kind`.
fn default_handler(lexer: &mut Lexer, kind: TokenKind) -> Token {
    let ch = lexer.at().unwrap_or_default();
    lexer.advance_n(ch.len_utf8());
    MK_TOKEN!(kind, ch.to_string())
}

/// `=`/`==` and `!`/`!=`: one character of lookahead picks the kind.
fn two_char_handler(lexer: &mut Lexer, single: TokenKind, double: TokenKind) -> Token {
    if lexer.peek() == Some('=') {
        let literal = lexer.remainder()[..2].to_string();
        lexer.advance_n(2);
        MK_TOKEN!(double, literal)
    } else {
        default_handler(lexer, single)
    }
}

// No escape processing. An unterminated string runs to the end of input.
fn string_handler(lexer: &mut Lexer) -> Token {
    lexer.advance_n(1);

    let literal = match lexer.remainder().find('"') {
        Some(end) => {
            let literal = lexer.remainder()[..end].to_string();
            lexer.advance_n(end + 1);
            literal
        }
        None => {
            let literal = lexer.remainder().to_string();
            lexer.advance_n(literal.len());
            literal
        }
    };

    MK_TOKEN!(TokenKind::String, literal)
}

fn symbol_handler(lexer: &mut Lexer) -> Token {
    // Dispatch has already checked the first character, so the run is never empty
    let value = SYMBOL_PATTERN
        .find(lexer.remainder())
        .map_or("", |matched| matched.as_str())
        .to_string();
    lexer.advance_n(value.len());

    MK_TOKEN!(lookup_identifier(&value), value)
}

fn number_handler(lexer: &mut Lexer) -> Token {
    // Dispatch has already checked the first character, so the run is never empty
    let value = NUMBER_PATTERN
        .find(lexer.remainder())
        .map_or("", |matched| matched.as_str())
        .to_string();
    lexer.advance_n(value.len());

    MK_TOKEN!(TokenKind::Int, value)
}

/// Drains a fresh lexer over `source`. The returned vector ends with
/// exactly one `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
