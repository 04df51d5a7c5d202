use tiny_token::*;

use crate::source::{SourceBuffer, SENTINEL};
use crate::{Lexer, LexerError, LexerResult};

pub struct Scanner<'a> {
    source: &'a SourceBuffer,
    pos: usize,
    /// Type of the last token produced, used to tell binary minus from a sign.
    last: Option<TokenType>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a SourceBuffer) -> Scanner<'a> {
        Scanner {
            source,
            pos: 0,
            last: None,
            failed: false,
        }
    }

    /// Skips spaces and tabs. Newlines are tokens and stay in place.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t') {
            self.bump();
        }
    }

    /// Reads an optional leading `-` and a run of digits. The caller makes
    /// sure the cursor is on a digit, or on a `-` followed by a digit.
    pub fn read_number(&mut self) -> LexerResult<Token> {
        let start = self.pos;

        if self.peek() == b'-' {
            self.bump();
        }

        while self.peek().is_ascii_digit() {
            self.bump();
        }

        self.lexeme(start, TokenType::Number)
    }

    /// Reads a run of letters and classifies it as a keyword or identifier.
    pub fn read_identifier_or_keyword(&mut self) -> LexerResult<Token> {
        let start = self.pos;

        while self.peek().is_ascii_alphabetic() {
            self.bump();
        }

        let token = self.lexeme(start, TokenType::Identifier)?;

        Ok(Token::key_word_or_ident(&token.lexeme))
    }

    fn parse(&mut self) -> LexerResult<Token> {
        self.skip_whitespace();

        let c = self.peek();
        if c == SENTINEL {
            return Ok(Token::eof());
        }

        if c.is_ascii_alphabetic() {
            return self.read_identifier_or_keyword();
        }

        if c.is_ascii_digit()
            || (c == b'-' && self.peek_next().is_ascii_digit() && !self.after_operand())
        {
            return self.read_number();
        }

        if let Some(kind) = TokenType::from_char_pair(c, self.peek_next()) {
            return Ok(self.convert_chars(kind, 2));
        }

        match TokenType::from_single_char(c) {
            Some(kind) => Ok(self.convert_chars(kind, 1)),
            None => self.parse_other(),
        }
    }

    fn convert_chars(&mut self, kind: TokenType, n: usize) -> Token {
        let start = self.pos;
        self.pos += n;

        Token {
            kind,
            lexeme: self.source.text(start, self.pos),
        }
    }

    fn parse_other(&mut self) -> LexerResult<Token> {
        let token = self.convert_chars(TokenType::Unknown, 1);
        log::warn!("not handled character at offset {}: {:?}", self.pos - 1, token.lexeme);

        Ok(token)
    }

    /// Builds a token from `start` to the cursor, rejecting oversized runs.
    /// A rejected run leaves the cursor at `start`.
    fn lexeme(&mut self, start: usize, kind: TokenType) -> LexerResult<Token> {
        let len = self.pos - start;
        if len > MAX_LEXEME_LEN {
            self.pos = start;
            return Err(LexerError::LexemeTooLong { start, len });
        }

        Ok(Token {
            kind,
            lexeme: self.source.text(start, self.pos),
        })
    }

    /// Whether the previous token ends an operand, making a following `-` a
    /// binary operator rather than a sign.
    fn after_operand(&self) -> bool {
        matches!(
            self.last,
            Some(TokenType::Number)
                | Some(TokenType::Identifier)
                | Some(TokenType::Bracket(Brackets::RightParenthesis))
        )
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn peek(&self) -> u8 {
        self.source.byte(self.pos)
    }

    fn peek_next(&self) -> u8 {
        self.source.byte(self.pos + 1)
    }
}

impl<'a> Lexer for Scanner<'a> {
    fn next_token(&mut self) -> LexerResult<Token> {
        let token = self.parse()?;
        log::trace!("{} at offset {}", token, self.pos);
        self.last = Some(token.kind);

        Ok(token)
    }

    fn position(&self) -> usize {
        self.pos
    }
}

/// Yields every token before end-of-input. Stops after the first error.
impl<'a> Iterator for Scanner<'a> {
    type Item = LexerResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Ok(tok) if tok.is_eof() => None,
            Ok(tok) => Some(Ok(tok)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
