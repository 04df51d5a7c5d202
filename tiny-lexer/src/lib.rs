pub mod lexer;
pub mod source;

use std::io;

use thiserror::Error;
use tiny_token::{Token, TokenType, MAX_LEXEME_LEN};

use crate::lexer::Scanner;
use crate::source::SourceBuffer;

pub type LexerResult<T> = Result<T, LexerError>;

#[derive(Debug, Error)]
pub enum LexerError {
    /// An identifier or digit run longer than `MAX_LEXEME_LEN`.
    #[error("lexeme of {len} bytes at offset {start} exceeds the limit of {max}", max = MAX_LEXEME_LEN)]
    LexemeTooLong { start: usize, len: usize },

    /// The consumption gate saw a different token than the grammar expects.
    #[error("syntax error: expected token {expected}, but found token {found} ('{lexeme}')")]
    UnexpectedToken {
        expected: TokenType,
        found: TokenType,
        lexeme: String,
    },

    #[error("cannot read source: {0}")]
    Io(#[from] io::Error),
}

/// Token source seen by a parser.
pub trait Lexer {
    /// Scans the next token. Once end-of-input is reached every further call
    /// returns the EOF token again.
    fn next_token(&mut self) -> LexerResult<Token>;

    /// Current read offset into the source.
    fn position(&self) -> usize;

    /// Checks that `current` has the `expected` type and, if so, replaces it
    /// with the next token. On mismatch neither `current` nor the read offset
    /// change.
    fn consume_token(&mut self, expected: &TokenType, current: &mut Token) -> LexerResult<()> {
        if current.kind != *expected {
            log::debug!(
                "gate rejected {} at offset {}, expected {}",
                current.kind,
                self.position(),
                expected
            );
            return Err(LexerError::UnexpectedToken {
                expected: *expected,
                found: current.kind,
                lexeme: current.lexeme.clone(),
            });
        }

        *current = self.next_token()?;
        log::debug!("gate consumed {}, next is {}", expected, current.kind);

        Ok(())
    }
}

/// Scans `source` to the end. The returned stream always ends with the EOF
/// token.
pub fn tokenize(source: &SourceBuffer) -> LexerResult<Vec<Token>> {
    let mut scanner = Scanner::new(source);
    let mut tokens: Vec<Token> = scanner.by_ref().collect::<LexerResult<_>>()?;
    tokens.push(scanner.next_token()?);

    Ok(tokens)
}

#[cfg(test)]
mod test {
    use tiny_token::*;

    use crate::lexer::Scanner;
    use crate::source::SourceBuffer;
    use crate::{tokenize, Lexer, LexerError};

    #[test]
    fn test_consume_matching_token() {
        let buf = SourceBuffer::from("x = 1");
        let mut scanner = Scanner::new(&buf);
        let mut current = scanner.next_token().unwrap();

        scanner.consume_token(&TokenType::Identifier, &mut current).unwrap();
        assert_eq!(current, Token::new(TokenType::Operator(Operators::Assign), "="));

        scanner
            .consume_token(&TokenType::Operator(Operators::Assign), &mut current)
            .unwrap();
        assert_eq!(current, Token::number("1"));

        scanner.consume_token(&TokenType::Number, &mut current).unwrap();
        assert!(current.is_eof());

        scanner.consume_token(&TokenType::Eof, &mut current).unwrap();
        assert!(current.is_eof());
    }

    #[test]
    fn test_consume_mismatch_does_not_advance() {
        let buf = SourceBuffer::from("x 10");
        let mut scanner = Scanner::new(&buf);
        let mut current = scanner.next_token().unwrap();
        let before = scanner.position();

        let err = scanner.consume_token(&TokenType::Number, &mut current).unwrap_err();
        match &err {
            LexerError::UnexpectedToken { expected, found, lexeme } => {
                assert_eq!(*expected, TokenType::Number);
                assert_eq!(*found, TokenType::Identifier);
                assert_eq!(lexeme, "x");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "syntax error: expected token number, but found token identifier ('x')"
        );
        assert_eq!(scanner.position(), before);
        assert_eq!(current, Token::ident("x"));
    }

    #[test]
    fn test_consume_propagates_scan_errors() {
        let long = "a".repeat(MAX_LEXEME_LEN + 1);
        let buf = SourceBuffer::from(format!("x {}", long).as_str());
        let mut scanner = Scanner::new(&buf);
        let mut current = scanner.next_token().unwrap();

        let err = scanner.consume_token(&TokenType::Identifier, &mut current).unwrap_err();
        assert!(matches!(err, LexerError::LexemeTooLong { start: 2, len: 64 }));
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize(&SourceBuffer::from("a b")).unwrap();
        assert_eq!(tokens, vec![Token::ident("a"), Token::ident("b"), Token::eof()]);

        let tokens = tokenize(&SourceBuffer::from("")).unwrap();
        assert_eq!(tokens, vec![Token::eof()]);
    }
}
